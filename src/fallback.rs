//! Default probability vectors for information sets missing from a dump.
//!
//! Solvers only dump information sets they reached, so a path that is never
//! taken may have no record. Each default puts all mass on the
//! non-aggressive action, the same way the tree lists that decision's actions.

/// `[BET, CHECK]`: always check.
pub const ALWAYS_CHECK: &[f64] = &[0.0, 1.0];
/// `[CALLBET, FOLD, RAISE]`: always fold to a bet.
pub const FOLD_TO_BET: &[f64] = &[0.0, 1.0, 0.0];
/// `[CALLRAISE, FOLD]`: always fold to a raise.
pub const FOLD_TO_RAISE: &[f64] = &[0.0, 1.0];

/// Default vector per decision point.
#[derive(Debug, Clone, Copy)]
pub struct FallbackPolicy {
    /// First-to-act at the empty history.
    pub opening: &'static [f64],
    /// Responder after a check.
    pub checked_to: &'static [f64],
    /// Either player facing a bet.
    pub facing_bet: &'static [f64],
    /// Either player facing a raise of their own bet.
    pub facing_raise: &'static [f64],
}

pub const FALLBACK_POLICY: FallbackPolicy = FallbackPolicy {
    opening: ALWAYS_CHECK,
    checked_to: ALWAYS_CHECK,
    facing_bet: FOLD_TO_BET,
    facing_raise: FOLD_TO_RAISE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_distributions() {
        let policy = FALLBACK_POLICY;
        for probs in [
            policy.opening,
            policy.checked_to,
            policy.facing_bet,
            policy.facing_raise,
        ] {
            let sum: f64 = probs.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
            assert!(probs.iter().all(|&p| p >= 0.0));
        }
    }
}
