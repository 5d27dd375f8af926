use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Block state stored on a match. Variants are keyed to the canonical slot
/// that set the block, not to the order in which users acted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "block_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BlockStatus {
    None,
    BlockedByUser1,
    BlockedByUser2,
}

/*
id SERIAL PRIMARY KEY,
user1_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
user2_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
block_status block_status NOT NULL DEFAULT 'none',
created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
UNIQUE (user1_id, user2_id),
CHECK (user1_id < user2_id)

 */
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i32,
    pub user1_id: Uuid,
    pub user2_id: Uuid,
    pub block_status: BlockStatus,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// The member of this match that is not `user_id`, or `None` when
    /// `user_id` is not a member at all.
    pub fn other_member(&self, user_id: Uuid) -> Option<Uuid> {
        if user_id == self.user1_id {
            Some(self.user2_id)
        } else if user_id == self.user2_id {
            Some(self.user1_id)
        } else {
            None
        }
    }
}

/// An unordered user pair in its stored form: user1 is always the lower id.
/// The single place where pair ordering happens; like, block and unblock all
/// go through here so at most one match row can exist per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalPair {
    user1: Uuid,
    user2: Uuid,
}

impl CanonicalPair {
    /// `None` when both ids are the same user; a pair always has two
    /// distinct members.
    pub fn new(a: Uuid, b: Uuid) -> Option<Self> {
        if a == b {
            return None;
        }
        Some(Self {
            user1: a.min(b),
            user2: a.max(b),
        })
    }

    pub fn user1(&self) -> Uuid {
        self.user1
    }

    pub fn user2(&self) -> Uuid {
        self.user2
    }

    /// The block marker recorded when `actor` blocks their counterpart, or
    /// `None` when `actor` is not a member of this pair.
    pub fn block_marker(&self, actor: Uuid) -> Option<BlockStatus> {
        if actor == self.user1 {
            Some(BlockStatus::BlockedByUser1)
        } else if actor == self.user2 {
            Some(BlockStatus::BlockedByUser2)
        } else {
            None
        }
    }
}

/// Result of resolving a user against a match row: the counterpart to
/// message, and the block state gating new sends.
#[derive(Debug)]
pub struct MatchMembership {
    pub match_id: i32,
    pub other_user_id: Uuid,
    pub block_status: BlockStatus,
}

impl MatchMembership {
    pub fn is_blocked(&self) -> bool {
        self.block_status != BlockStatus::None
    }
}

/// A match row enriched with both members' display names, as returned by
/// the matchedUsers listing.
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: i32,
    pub user1_id: Uuid,
    pub user2_id: Uuid,
    pub block_status: BlockStatus,
    pub created_at: DateTime<Utc>,
    pub user1_name: String,
    pub user2_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low_high() -> (Uuid, Uuid) {
        let a = Uuid::parse_str("00000000-0000-0000-0000-000000000005").unwrap();
        let b = Uuid::parse_str("00000000-0000-0000-0000-000000000009").unwrap();
        (a, b)
    }

    #[test]
    fn pair_is_ordered_regardless_of_argument_order() {
        let (low, high) = low_high();
        let forward = CanonicalPair::new(low, high).unwrap();
        let backward = CanonicalPair::new(high, low).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.user1(), low);
        assert_eq!(forward.user2(), high);
        assert!(forward.user1() < forward.user2());
    }

    #[test]
    fn pair_rejects_a_single_user() {
        let (low, _) = low_high();
        assert!(CanonicalPair::new(low, low).is_none());
    }

    #[test]
    fn block_marker_follows_the_actor_slot() {
        let (low, high) = low_high();
        let pair = CanonicalPair::new(high, low).unwrap();
        assert_eq!(pair.block_marker(low), Some(BlockStatus::BlockedByUser1));
        assert_eq!(pair.block_marker(high), Some(BlockStatus::BlockedByUser2));
        assert_eq!(pair.block_marker(Uuid::new_v4()), None);
    }

    fn match_row() -> Match {
        let (low, high) = low_high();
        Match {
            id: 1,
            user1_id: low,
            user2_id: high,
            block_status: BlockStatus::None,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn other_member_is_the_counterpart() {
        let m = match_row();
        assert_eq!(m.other_member(m.user1_id), Some(m.user2_id));
        assert_eq!(m.other_member(m.user2_id), Some(m.user1_id));
        assert_eq!(m.other_member(Uuid::new_v4()), None);
    }

    #[test]
    fn any_block_marker_counts_as_blocked() {
        let (_, high) = low_high();
        let mut membership = MatchMembership {
            match_id: 1,
            other_user_id: high,
            block_status: BlockStatus::None,
        };
        assert!(!membership.is_blocked());
        membership.block_status = BlockStatus::BlockedByUser1;
        assert!(membership.is_blocked());
        membership.block_status = BlockStatus::BlockedByUser2;
        assert!(membership.is_blocked());
    }

    #[test]
    fn block_status_serializes_to_its_wire_names() {
        assert_eq!(
            serde_json::to_value(BlockStatus::None).unwrap(),
            serde_json::json!("none")
        );
        assert_eq!(
            serde_json::to_value(BlockStatus::BlockedByUser1).unwrap(),
            serde_json::json!("blocked_by_user1")
        );
    }
}
