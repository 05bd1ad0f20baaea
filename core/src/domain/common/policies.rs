use crate::domain::common::entities::app_errors::CoreError;

pub fn ensure_policy(allowed: bool, message: &str) -> Result<(), CoreError> {
    if allowed {
        Ok(())
    } else {
        tracing::warn!("policy rejected: {message}");
        Err(CoreError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_policy_passes_when_allowed() {
        assert!(ensure_policy(true, "ok").is_ok());
    }

    #[test]
    fn ensure_policy_rejects_with_forbidden() {
        assert_eq!(ensure_policy(false, "nope"), Err(CoreError::Forbidden));
    }
}
