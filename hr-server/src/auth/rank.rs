//! Role Rank Definitions
//!
//! Rank-based RBAC: every role label resolves to an integer rank and
//! authorization compares ranks.
//!
//! ## 设计原则
//! - 角色标签 → 整数等级，全序比较，无权限列表
//! - 未知角色解析为 0 (最小权限)，判定永不失败
//! - 等级表启动时构造、不可变，通过 ServerState 注入 (测试可替换)

use std::collections::HashMap;

/// 角色标签
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_LEADER: &str = "leader";
pub const ROLE_SUPERVISOR: &str = "supervisor";
pub const ROLE_TEAM_LEAD: &str = "team-lead";
pub const ROLE_STAFF: &str = "staff";
pub const ROLE_INTERN: &str = "intern";

/// 可被指派为上级的角色
pub const MANAGER_ROLES: &[&str] = &[ROLE_LEADER, ROLE_SUPERVISOR, ROLE_TEAM_LEAD];

/// 默认等级表
pub const DEFAULT_RANKS: &[(&str, i64)] = &[
    (ROLE_ADMIN, 100),
    (ROLE_LEADER, 80),
    (ROLE_SUPERVISOR, 60),
    (ROLE_TEAM_LEAD, 50),
    (ROLE_STAFF, 30),
    (ROLE_INTERN, 20),
];

/// 角色等级表 - 角色标签到整数等级的不可变映射
///
/// Unknown labels resolve to rank 0 (least privilege), so lookups are total
/// and never fail.
#[derive(Debug, Clone)]
pub struct RankTable {
    ranks: HashMap<String, i64>,
}

impl RankTable {
    /// 使用指定的等级对构造等级表
    pub fn new(pairs: &[(&str, i64)]) -> Self {
        Self {
            ranks: pairs
                .iter()
                .map(|(label, rank)| (label.to_string(), *rank))
                .collect(),
        }
    }

    /// 角色标签 → 等级 (未知角色 → 0)
    pub fn rank(&self, role: &str) -> i64 {
        self.ranks.get(role).copied().unwrap_or(0)
    }

    /// 调用者等级是否达到所需角色的等级
    pub fn meets_minimum(&self, caller_role: &str, required_role: &str) -> bool {
        self.rank(caller_role) >= self.rank(required_role)
    }

    /// 是否管理员等级
    pub fn is_admin(&self, role: &str) -> bool {
        self.meets_minimum(role, ROLE_ADMIN)
    }

    /// 角色标签是否在等级表中
    pub fn is_known(&self, role: &str) -> bool {
        self.ranks.contains_key(role)
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::new(DEFAULT_RANKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranks() {
        let table = RankTable::default();
        assert_eq!(table.rank(ROLE_ADMIN), 100);
        assert_eq!(table.rank(ROLE_LEADER), 80);
        assert_eq!(table.rank(ROLE_SUPERVISOR), 60);
        assert_eq!(table.rank(ROLE_TEAM_LEAD), 50);
        assert_eq!(table.rank(ROLE_STAFF), 30);
        assert_eq!(table.rank(ROLE_INTERN), 20);
    }

    #[test]
    fn test_unknown_role_ranks_zero() {
        let table = RankTable::default();
        assert_eq!(table.rank("ceo"), 0);
        assert_eq!(table.rank(""), 0);
    }

    #[test]
    fn test_ranks_are_non_negative() {
        let table = RankTable::default();
        for (label, _) in DEFAULT_RANKS {
            assert!(table.rank(label) >= 0);
        }
        assert!(table.rank("unknown") >= 0);
    }

    #[test]
    fn test_meets_minimum() {
        let table = RankTable::default();
        assert!(table.meets_minimum(ROLE_ADMIN, ROLE_LEADER));
        assert!(table.meets_minimum(ROLE_LEADER, ROLE_LEADER));
        assert!(!table.meets_minimum(ROLE_INTERN, ROLE_STAFF));
        // Unknown roles never clear a known minimum
        assert!(!table.meets_minimum("ceo", ROLE_INTERN));
        // Any role clears an unknown (rank 0) minimum
        assert!(table.meets_minimum(ROLE_INTERN, "ceo"));
    }

    #[test]
    fn test_is_admin() {
        let table = RankTable::default();
        assert!(table.is_admin(ROLE_ADMIN));
        assert!(!table.is_admin(ROLE_LEADER));
        assert!(!table.is_admin("unknown"));
    }

    #[test]
    fn test_substituted_table() {
        // Alternate rank tables can be injected for testing
        let table = RankTable::new(&[("root", 10), ("guest", 1)]);
        assert!(table.meets_minimum("root", "guest"));
        assert!(!table.meets_minimum("guest", "root"));
        assert_eq!(table.rank(ROLE_ADMIN), 0);
    }
}
