//! Path: native/game_core/src/upgrade.rs
//! Summary: レベルアップ時の選択肢カタログ（武器 9 種 + パッシブ 5 種 + 回復）

use crate::passive::{PassiveKind, MAX_PASSIVE_LEVEL};
use crate::weapon::{WeaponKind, MAX_WEAPON_LEVEL};
use serde::{Serialize, Serializer};

/// 回復は消耗品扱いで事実上無制限
pub const HEAL_MAX_LEVEL: u32 = 99;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum UpgradeId {
    Weapon(WeaponKind),
    Passive(PassiveKind),
    /// 最大 HP の 50% を即時回復
    Heal,
}

impl UpgradeId {
    /// カタログ順（武器 → パッシブ → 回復）
    pub fn catalog() -> impl Iterator<Item = UpgradeId> {
        WeaponKind::ALL
            .into_iter()
            .map(UpgradeId::Weapon)
            .chain(PassiveKind::ALL.into_iter().map(UpgradeId::Passive))
            .chain(std::iter::once(UpgradeId::Heal))
    }

    pub fn id(&self) -> &'static str {
        match self {
            UpgradeId::Weapon(k)  => k.id(),
            UpgradeId::Passive(k) => k.id(),
            UpgradeId::Heal       => "heal",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        if id == "heal" {
            return Some(UpgradeId::Heal);
        }
        WeaponKind::from_id(id)
            .map(UpgradeId::Weapon)
            .or_else(|| PassiveKind::from_id(id).map(UpgradeId::Passive))
    }

    pub fn max_level(&self) -> u32 {
        match self {
            UpgradeId::Weapon(_)  => MAX_WEAPON_LEVEL,
            UpgradeId::Passive(_) => MAX_PASSIVE_LEVEL,
            UpgradeId::Heal       => HEAL_MAX_LEVEL,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeId::Weapon(k) => match k {
                WeaponKind::Wand      => "Magic Wand",
                WeaponKind::Garlic    => "Garlic",
                WeaponKind::Orbit     => "Spellbook",
                WeaponKind::Whip      => "Whip",
                WeaponKind::Dagger    => "Dagger",
                WeaponKind::Axe       => "Axe",
                WeaponKind::Lightning => "Lightning Ring",
                WeaponKind::Holywater => "Holy Water",
                WeaponKind::Frost     => "Frost Shard",
            },
            UpgradeId::Passive(k) => match k {
                PassiveKind::Speed      => "Boots",
                PassiveKind::Lifesteal  => "Bloodthirst",
                PassiveKind::Luck       => "Clover",
                PassiveKind::Cdr        => "Cooldown Rune",
                PassiveKind::MagnetPlus => "Magnet Aura",
            },
            UpgradeId::Heal => "Roast Meat",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UpgradeId::Weapon(k) => match k {
                WeaponKind::Wand      => "Fires an extra bolt at the nearest enemy and hits harder",
                WeaponKind::Garlic    => "Damaging aura around you grows wider and stronger",
                WeaponKind::Orbit     => "Adds a satellite that circles you and spins faster",
                WeaponKind::Whip      => "Frontal lash with longer reach and a wider arc",
                WeaponKind::Dagger    => "Rapid daggers thrown where you face",
                WeaponKind::Axe       => "Lobbed axes that cleave everything they pass",
                WeaponKind::Lightning => "Strikes one more of the closest enemies",
                WeaponKind::Holywater => "Leaves a larger, longer burning pool",
                WeaponKind::Frost     => "Chills one more target and slows it longer",
            },
            UpgradeId::Passive(k) => match k {
                PassiveKind::Speed      => "Move faster",
                PassiveKind::Lifesteal  => "Recover health on every kill",
                PassiveKind::Luck       => "Items drop more often",
                PassiveKind::Cdr        => "All weapons recharge faster",
                PassiveKind::MagnetPlus => "Gems are pulled in from further away",
            },
            UpgradeId::Heal => "Instantly restores half of your health",
        }
    }
}

impl Serialize for UpgradeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// UI に提示する選択肢 1 件
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpgradeChoice {
    pub id:          UpgradeId,
    pub name:        &'static str,
    pub description: &'static str,
    /// 現在のレベル（回復は常に 0）
    pub level:       u32,
}

impl UpgradeChoice {
    pub fn new(id: UpgradeId, level: u32) -> Self {
        Self { id, name: id.name(), description: id.description(), level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fifteen_distinct_ids() {
        let ids: Vec<&str> = UpgradeId::catalog().map(|u| u.id()).collect();
        assert_eq!(ids.len(), 15);
        let mut dedup = ids.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), 15);
        assert_eq!(ids.last(), Some(&"heal"));
    }

    #[test]
    fn parse_round_trips() {
        for u in UpgradeId::catalog() {
            assert_eq!(UpgradeId::parse(u.id()), Some(u));
        }
        assert_eq!(UpgradeId::parse("excalibur"), None);
    }

    #[test]
    fn heal_is_effectively_unlimited() {
        assert_eq!(UpgradeId::Heal.max_level(), HEAL_MAX_LEVEL);
        assert_eq!(UpgradeId::Weapon(WeaponKind::Axe).max_level(), 5);
    }
}
