use super::error::Error;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::sync::OnceLock;

const DEFAULT_POLICY_TOML: &str = include_str!("../../resources/default.policy.toml");

static DEFAULT_POLICY: OnceLock<LifetimePolicy> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
pub struct LifetimePolicy {
    pub lifetime: LifetimeLists,
    #[serde(default)]
    pub constants: PhysicalConstants,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LifetimeLists {
    #[serde(default)]
    pub stable: BTreeSet<i32>,
    #[serde(default)]
    pub short_lived: BTreeSet<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhysicalConstants {
    #[serde(default = "default_hbar_c")]
    pub hbar_c: f64,
    #[serde(default = "default_speed_of_light")]
    pub speed_of_light: f64,
}

fn default_hbar_c() -> f64 {
    0.19732696312541853
}
fn default_speed_of_light() -> f64 {
    29.9792458e10
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            hbar_c: default_hbar_c(),
            speed_of_light: default_speed_of_light(),
        }
    }
}

impl LifetimePolicy {
    pub fn is_stable(&self, pdg: i32) -> bool {
        self.lifetime.stable.contains(&pdg.saturating_abs())
    }

    pub fn is_short_lived(&self, pdg: i32) -> bool {
        self.lifetime.short_lived.contains(&pdg.saturating_abs())
    }
}

pub fn load_policy(custom_toml: Option<&str>) -> Result<LifetimePolicy, Error> {
    match custom_toml {
        Some(toml) => {
            let policy: LifetimePolicy = toml::from_str(toml)?;
            validate(&policy)?;
            Ok(policy)
        }
        None => Ok(get_default_policy().clone()),
    }
}

pub fn get_default_policy() -> &'static LifetimePolicy {
    DEFAULT_POLICY.get_or_init(|| {
        toml::from_str(DEFAULT_POLICY_TOML)
            .expect("Failed to parse embedded default lifetime policy. This is a library bug.")
    })
}

fn validate(policy: &LifetimePolicy) -> Result<(), Error> {
    let constants = &policy.constants;
    if !(constants.hbar_c.is_finite() && constants.hbar_c > 0.0) {
        return Err(Error::InvalidConfig(format!(
            "hbar_c must be positive and finite, got {}",
            constants.hbar_c
        )));
    }
    if !(constants.speed_of_light.is_finite() && constants.speed_of_light > 0.0) {
        return Err(Error::InvalidConfig(format!(
            "speed_of_light must be positive and finite, got {}",
            constants.speed_of_light
        )));
    }
    if let Some(pdg) = policy
        .lifetime
        .stable
        .intersection(&policy.lifetime.short_lived)
        .next()
    {
        return Err(Error::InvalidConfig(format!(
            "PDG code {pdg} is listed as both stable and short-lived"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_lists() {
        let policy = get_default_policy();
        for pdg in [11, 12, 14, 16, 22, 2212] {
            assert!(policy.is_stable(pdg), "{pdg} should be stable");
            assert!(policy.is_stable(-pdg), "-{pdg} should be stable");
        }
        for pdg in [0, 423, 433, 4312, 4322, 5112, 5222] {
            assert!(policy.is_short_lived(pdg), "{pdg} should be short-lived");
        }
        assert!(!policy.is_stable(13));
        assert!(!policy.is_short_lived(13));
    }

    #[test]
    fn default_constants() {
        let c = &get_default_policy().constants;
        assert!((c.hbar_c - 0.19732696312541853).abs() < 1e-15);
        assert!((c.speed_of_light - 2.99792458e11).abs() < 1.0);
    }

    #[test]
    fn custom_policy_fills_default_constants() {
        let policy = load_policy(Some("[lifetime]\nstable = [2112]\n")).unwrap();
        assert!(policy.is_stable(2112));
        assert!(!policy.is_stable(11));
        assert!(policy.lifetime.short_lived.is_empty());
        assert!((policy.constants.hbar_c - default_hbar_c()).abs() < 1e-15);
    }

    #[test]
    fn custom_policy_syntax_error() {
        let err = load_policy(Some("[lifetime\nstable = [")).unwrap_err();
        assert!(matches!(err, Error::PolicyParse(_)));
    }

    #[test]
    fn overlapping_lists_are_rejected() {
        let toml = "[lifetime]\nstable = [22]\nshort_lived = [22]\n";
        let err = load_policy(Some(toml)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn non_positive_constant_is_rejected() {
        let toml = "[lifetime]\n[constants]\nspeed_of_light = 0.0\n";
        let err = load_policy(Some(toml)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
