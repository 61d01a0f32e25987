// src/modules/section/domain/ordering.rs

use std::collections::HashMap;

use uuid::Uuid;

/// Column holding the user-controlled position.
pub const ORDER_COLUMN: &str = "display_order";
/// Stable tie-breaker appended to every sort.
pub const CREATED_AT_COLUMN: &str = "created_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl SortKey {
    const fn asc(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    const fn desc(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }
}

/// How a section's items are positioned in lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingStrategy {
    /// Position is `display_order`, chosen by the user.
    UserDefined,
    /// Newest first by a date column; no stored position.
    DateDesc { date_column: &'static str },
    /// Grouped by `group_column`, then `display_order` inside each group.
    MultiField { group_column: &'static str },
}

impl OrderingStrategy {
    pub fn resolve_sort(&self) -> Vec<SortKey> {
        let mut keys = match *self {
            OrderingStrategy::UserDefined => vec![SortKey::asc(ORDER_COLUMN)],
            OrderingStrategy::DateDesc { date_column } => vec![SortKey::desc(date_column)],
            OrderingStrategy::MultiField { group_column } => {
                vec![SortKey::asc(group_column), SortKey::asc(ORDER_COLUMN)]
            }
        };
        keys.push(SortKey::asc(CREATED_AT_COLUMN));
        keys
    }

    /// `None` when the section keeps no stored position.
    pub fn order_column(&self) -> Option<&'static str> {
        match *self {
            OrderingStrategy::DateDesc { .. } => None,
            _ => Some(ORDER_COLUMN),
        }
    }

    pub fn group_column(&self) -> Option<&'static str> {
        match *self {
            OrderingStrategy::MultiField { group_column } => Some(group_column),
            _ => None,
        }
    }

    pub fn supports_reorder(&self) -> bool {
        self.order_column().is_some()
    }

    /// Position for an appended item given the current maximum in scope.
    pub fn next_order(current_max: Option<i32>) -> i32 {
        current_max.map_or(0, |max| max.saturating_add(1))
    }

    /// Explicit positions win; otherwise the item is appended.
    pub fn resolve_placement(&self, explicit: Option<i32>, current_max: Option<i32>) -> Option<i32> {
        self.order_column()?;
        Some(explicit.unwrap_or_else(|| Self::next_order(current_max)))
    }

    /// Dense positions for a reorder request.
    ///
    /// User-defined: the index in `ids`. Multi-field: the index among ids of
    /// the same group, so every group restarts at 0. Ids without a known
    /// group are skipped.
    pub fn assign_positions(
        &self,
        ids: &[Uuid],
        groups: &HashMap<Uuid, String>,
    ) -> Vec<(Uuid, i32)> {
        match *self {
            OrderingStrategy::DateDesc { .. } => Vec::new(),
            OrderingStrategy::UserDefined => ids
                .iter()
                .enumerate()
                .map(|(index, id)| (*id, index as i32))
                .collect(),
            OrderingStrategy::MultiField { .. } => {
                let mut counters: HashMap<&str, i32> = HashMap::new();
                ids.iter()
                    .filter_map(|id| {
                        let group = groups.get(id)?;
                        let counter = counters.entry(group.as_str()).or_insert(0);
                        let position = *counter;
                        *counter += 1;
                        Some((*id, position))
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKILLS: OrderingStrategy = OrderingStrategy::MultiField {
        group_column: "category",
    };
    const CERTIFICATIONS: OrderingStrategy = OrderingStrategy::DateDesc {
        date_column: "issue_date",
    };

    #[test]
    fn next_order_starts_at_zero() {
        assert_eq!(OrderingStrategy::next_order(None), 0);
        assert_eq!(OrderingStrategy::next_order(Some(4)), 5);
    }

    #[test]
    fn sort_keys_end_with_creation_time() {
        assert_eq!(
            OrderingStrategy::UserDefined.resolve_sort(),
            vec![SortKey::asc("display_order"), SortKey::asc("created_at")]
        );
        assert_eq!(
            CERTIFICATIONS.resolve_sort(),
            vec![SortKey::desc("issue_date"), SortKey::asc("created_at")]
        );
        assert_eq!(
            SKILLS.resolve_sort(),
            vec![
                SortKey::asc("category"),
                SortKey::asc("display_order"),
                SortKey::asc("created_at")
            ]
        );
    }

    #[test]
    fn date_desc_keeps_no_position() {
        assert_eq!(CERTIFICATIONS.order_column(), None);
        assert!(!CERTIFICATIONS.supports_reorder());
        assert_eq!(CERTIFICATIONS.resolve_placement(Some(3), Some(9)), None);
    }

    #[test]
    fn placement_prefers_explicit_position() {
        let strategy = OrderingStrategy::UserDefined;
        assert_eq!(strategy.resolve_placement(Some(7), Some(2)), Some(7));
        assert_eq!(strategy.resolve_placement(None, Some(2)), Some(3));
        assert_eq!(strategy.resolve_placement(None, None), Some(0));
    }

    #[test]
    fn user_defined_positions_follow_index() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];

        let positions = OrderingStrategy::UserDefined.assign_positions(&ids, &HashMap::new());

        assert_eq!(positions, vec![(ids[0], 0), (ids[1], 1), (ids[2], 2)]);
    }

    #[test]
    fn multi_field_positions_restart_per_group() {
        let (rust, go, react, unknown) = (
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        let groups = HashMap::from([
            (rust, "Backend".to_string()),
            (go, "Backend".to_string()),
            (react, "Frontend".to_string()),
        ]);

        let positions = SKILLS.assign_positions(&[go, react, unknown, rust], &groups);

        assert_eq!(positions, vec![(go, 0), (react, 0), (rust, 1)]);
    }
}
