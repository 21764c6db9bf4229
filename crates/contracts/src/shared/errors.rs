use thiserror::Error;
use uuid::Uuid;

/// Fatal page-level errors surfaced inline by the dashboard.
/// None of these is retried; a failed load is reported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// No session: the view redirects to the login page.
    #[error("Sessão expirada. Faça login novamente.")]
    AuthenticationRequired,
    /// The authenticated user has no linked client record.
    #[error("Nenhum cliente vinculado a este usuário.")]
    ClientNotFound,
    /// Network or backend failure while loading rows.
    #[error("Falha ao carregar os dados: {0}")]
    Fetch(String),
}

/// Failures of the two-step client account creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateClientError {
    /// The auth identity could not be created; nothing was persisted.
    #[error("Erro ao criar o usuário: {0}")]
    SignUp(String),
    /// The identity exists but the client-record insert failed. The
    /// identity is left orphaned; no automatic rollback is attempted.
    #[error("Usuário {user_id} criado, mas o cadastro do cliente falhou: {message}")]
    ProfileInsertFailed { user_id: Uuid, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_failure_names_the_orphaned_identity() {
        let user_id = Uuid::nil();
        let err = CreateClientError::ProfileInsertFailed {
            user_id,
            message: "permission denied".into(),
        };
        let text = err.to_string();
        assert!(text.contains(&user_id.to_string()));
        assert!(text.contains("permission denied"));
    }
}
