//! Role naming for role-based access control.

/// A role guarding privileged functions, named in upper snake case
/// without the `_ROLE` suffix (e.g. `PAUSER`, `FEE_MANAGER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role<'a>(pub &'a str);

impl Role<'_> {
    /// `PAUSER_ROLE`
    pub fn constant(&self) -> String {
        format!("{}_ROLE", self.0)
    }

    /// The constructor parameter receiving the role, `pauser` or `feeManager`.
    pub fn param(&self) -> String {
        let mut param = String::with_capacity(self.0.len());
        for (i, word) in self.0.split('_').filter(|w| !w.is_empty()).enumerate() {
            let lower = word.to_ascii_lowercase();
            if i == 0 {
                param.push_str(&lower);
            } else {
                let mut chars = lower.chars();
                if let Some(first) = chars.next() {
                    param.push(first.to_ascii_uppercase());
                    param.push_str(chars.as_str());
                }
            }
        }
        param
    }

    /// `bytes32 public constant PAUSER_ROLE = keccak256("PAUSER_ROLE");`
    pub fn declaration(&self) -> String {
        let constant = self.constant();
        format!(
            "bytes32 public constant {} = keccak256(\"{}\");",
            constant, constant
        )
    }

    /// `_grantRole(PAUSER_ROLE, pauser);`
    pub fn grant(&self) -> String {
        format!("_grantRole({}, {});", self.constant(), self.param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_role() {
        let role = Role("PAUSER");
        assert_eq!(role.constant(), "PAUSER_ROLE");
        assert_eq!(role.param(), "pauser");
        assert_eq!(
            role.declaration(),
            "bytes32 public constant PAUSER_ROLE = keccak256(\"PAUSER_ROLE\");"
        );
        assert_eq!(role.grant(), "_grantRole(PAUSER_ROLE, pauser);");
    }

    #[test]
    fn test_multi_word_role() {
        let role = Role("FEE_MANAGER");
        assert_eq!(role.param(), "feeManager");
        assert_eq!(role.grant(), "_grantRole(FEE_MANAGER_ROLE, feeManager);");
    }
}
