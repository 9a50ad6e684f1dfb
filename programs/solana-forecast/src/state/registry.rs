use anchor_lang::prelude::*;

use crate::errors::ForecastError;

pub const MAX_COMPONENTS: usize = 16;
pub const MAX_COMPONENT_NAME_LEN: usize = 32;
pub const MAX_COMPONENT_VERSION_LEN: usize = 16;

/// Name → address lookup table so off-chain callers locate deployed
/// component accounts without hardcoding addresses. No business logic.
#[account]
pub struct ComponentRegistry {
    pub authority: Pubkey,
    pub components: Vec<ComponentEntry>,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ComponentEntry {
    pub name: String,
    pub address: Pubkey,
    pub version: String,
}

impl ComponentRegistry {
    // 8 (discriminator) + 32 (authority) + 4 (vec len) + 1 (bump)
    // + MAX_COMPONENTS * (4 + 32 (name) + 32 (address) + 4 + 16 (version))
    pub const LEN: usize = 8 + 32 + 4 + 1 + MAX_COMPONENTS * (4 + 32 + 32 + 4 + 16);

    pub fn entry(&self, name: &str) -> Result<&ComponentEntry> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .ok_or(ForecastError::ComponentNotFound.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.iter().any(|c| c.name == name)
    }

    /// Insert or update an entry. Fails once the fixed capacity is exhausted.
    pub fn upsert(&mut self, name: String, address: Pubkey, version: String) -> Result<()> {
        if let Some(entry) = self.components.iter_mut().find(|c| c.name == name) {
            entry.address = address;
            entry.version = version;
            return Ok(());
        }
        require!(
            self.components.len() < MAX_COMPONENTS,
            ForecastError::RegistryFull
        );
        self.components.push(ComponentEntry {
            name,
            address,
            version,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ComponentRegistry {
        ComponentRegistry {
            authority: Pubkey::new_unique(),
            components: Vec::new(),
            bump: 255,
        }
    }

    #[test]
    fn upsert_replaces_existing_entry() {
        let mut reg = registry();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();

        reg.upsert("markets".into(), first, "1.0.0".into()).unwrap();
        reg.upsert("markets".into(), second, "1.1.0".into()).unwrap();

        assert_eq!(reg.components.len(), 1);
        let entry = reg.entry("markets").unwrap();
        assert_eq!(entry.address, second);
        assert_eq!(entry.version, "1.1.0");
    }

    #[test]
    fn upsert_fails_at_capacity() {
        let mut reg = registry();
        for i in 0..MAX_COMPONENTS {
            reg.upsert(format!("component-{i}"), Pubkey::new_unique(), "1.0.0".into())
                .unwrap();
        }
        assert!(reg
            .upsert("one-too-many".into(), Pubkey::new_unique(), "1.0.0".into())
            .is_err());
        // Updates still work at capacity.
        assert!(reg
            .upsert("component-0".into(), Pubkey::new_unique(), "2.0.0".into())
            .is_ok());
    }

    #[test]
    fn lookup_of_unknown_component_fails() {
        let reg = registry();
        assert!(!reg.contains("resolver"));
        assert!(reg.entry("resolver").is_err());
    }
}
