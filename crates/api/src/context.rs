use vitrine_auth::SessionClaims;

/// Authenticated admin context for a request.
///
/// Inserted by the session gate; present on every route behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminContext {
    claims: SessionClaims,
}

impl AdminContext {
    pub fn new(claims: SessionClaims) -> Self {
        Self { claims }
    }

    pub fn email(&self) -> &str {
        &self.claims.sub
    }

    pub fn name(&self) -> &str {
        &self.claims.name
    }

    pub fn claims(&self) -> &SessionClaims {
        &self.claims
    }
}
