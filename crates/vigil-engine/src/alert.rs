//! Alert derivation from tier transitions.
//!
//! A deterministic state machine over {Stable, Risk, Critical}: every state
//! accepts every transition, and only worsening transitions out of Stable
//! or Risk produce more than a plain status line.

use vigil_core::{AlertKind, AlertRecord, Tier};

/// Derive the alert for one observation, given the tier of the patient's
/// previous label (if any) and the tier of the current one.
///
/// Rules, first match wins:
/// 1. no history → plain status
/// 2. Stable → Risk|Critical → early warning naming the new tier
/// 3. Risk → Critical → critical escalation
/// 4. anything else (including de-escalation and sustained Critical) →
///    plain status
pub fn evaluate(previous: Option<Tier>, current: Tier) -> AlertRecord {
    match (previous, current) {
        (None, tier) => status(tier),
        (Some(Tier::Stable), Tier::Risk) | (Some(Tier::Stable), Tier::Critical) => AlertRecord {
            kind: AlertKind::EarlyWarning,
            tier: current,
            message: format!("Early warning: condition entering {} state", current),
        },
        (Some(Tier::Risk), Tier::Critical) => AlertRecord {
            kind: AlertKind::Escalation,
            tier: current,
            message: "Critical escalation: condition worsening to Critical".to_string(),
        },
        (Some(_), tier) => status(tier),
    }
}

fn status(tier: Tier) -> AlertRecord {
    AlertRecord {
        kind: AlertKind::Status,
        tier,
        message: format!("Status: {}", tier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_is_plain_status() {
        let alert = evaluate(None, Tier::Critical);
        assert_eq!(alert.kind, AlertKind::Status);
        assert_eq!(alert.message, "Status: Critical");
    }

    #[test]
    fn stable_to_risk_warns_early() {
        let alert = evaluate(Some(Tier::Stable), Tier::Risk);
        assert_eq!(alert.kind, AlertKind::EarlyWarning);
        assert_eq!(alert.tier, Tier::Risk);
        assert!(alert.message.contains("Risk"));
    }

    #[test]
    fn stable_to_critical_warns_early() {
        let alert = evaluate(Some(Tier::Stable), Tier::Critical);
        assert_eq!(alert.kind, AlertKind::EarlyWarning);
        assert!(alert.message.contains("Critical"));
    }

    #[test]
    fn risk_to_critical_escalates() {
        let alert = evaluate(Some(Tier::Risk), Tier::Critical);
        assert_eq!(alert.kind, AlertKind::Escalation);
        assert!(alert.is_warning());
    }

    #[test]
    fn sustained_and_deescalating_states_stay_plain() {
        for (prev, current) in [
            (Tier::Stable, Tier::Stable),
            (Tier::Risk, Tier::Risk),
            (Tier::Critical, Tier::Critical),
            (Tier::Critical, Tier::Stable),
            (Tier::Critical, Tier::Risk),
            (Tier::Risk, Tier::Stable),
        ] {
            let alert = evaluate(Some(prev), current);
            assert_eq!(alert.kind, AlertKind::Status, "{:?} -> {:?}", prev, current);
            assert_eq!(alert.message, format!("Status: {}", current));
        }
    }
}
