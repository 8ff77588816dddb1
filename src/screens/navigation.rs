use std::fmt::{Display, Formatter};

/// The sections of the dashboard and the command that opens each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Overview,
    SecureWipe,
    VerifyCertificate,
    DriveHealth,
    Certificates,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Overview,
        Route::SecureWipe,
        Route::VerifyCertificate,
        Route::DriveHealth,
        Route::Certificates,
    ];

    /// The sections advertised as features, everything but the overview itself.
    pub fn features() -> impl Iterator<Item = Route> {
        Route::ALL.into_iter().filter(|route| *route != Route::Overview)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Overview => "Overview",
            Route::SecureWipe => "Secure Wipe",
            Route::VerifyCertificate => "Verify Certificate",
            Route::DriveHealth => "Drive Health",
            Route::Certificates => "Certificates",
        }
    }

    pub fn command(&self) -> &'static str {
        match self {
            Route::Overview => "overview",
            Route::SecureWipe => "wipe",
            Route::VerifyCertificate => "verify",
            Route::DriveHealth => "health",
            Route::Certificates => "certificates",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Route::Overview => "Your account and recent certificates",
            Route::SecureWipe => "Military-grade data destruction with certified proof",
            Route::VerifyCertificate => "Verify authenticity of wipe certificates instantly",
            Route::DriveHealth => "Monitor drive status and performance metrics",
            Route::Certificates => "View and manage all your certificates",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<20} {:<14} {}", self.name(), self.command(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_leave_out_the_overview() {
        let features = Route::features().collect::<Vec<_>>();

        assert_eq!(features.len(), 4);
        assert!(!features.contains(&Route::Overview));
    }

    #[test]
    fn commands_are_unique() {
        let mut commands = Route::ALL.iter().map(Route::command).collect::<Vec<_>>();
        commands.sort();
        commands.dedup();

        assert_eq!(commands.len(), Route::ALL.len());
    }
}
