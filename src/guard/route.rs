/// Navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Info,
    Products,
    ProductDetail,
}

impl Route {
    /// Router path for this view.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Home => "/",
            Self::Info => "/info",
            Self::Products => "/products",
            Self::ProductDetail => "/products/:id",
        }
    }

    /// Whether the view requires a valid session.
    pub fn is_protected(&self) -> bool {
        match self {
            Self::Login | Self::Home => false,
            Self::Info | Self::Products | Self::ProductDetail => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_is_public() {
        assert!(!Route::Login.is_protected());
    }

    #[test]
    fn test_resource_routes_are_protected() {
        assert!(Route::Products.is_protected());
        assert!(Route::ProductDetail.is_protected());
        assert!(Route::Info.is_protected());
    }
}
