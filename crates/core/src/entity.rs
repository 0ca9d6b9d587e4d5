//! Entity trait: identity that stays stable for the lifetime of a catalog.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Ord + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Returns the first identifier that occurs more than once, in iteration order.
pub fn first_duplicate_id<'a, E>(entities: impl IntoIterator<Item = &'a E>) -> Option<E::Id>
where
    E: Entity + 'a,
{
    let mut seen = std::collections::BTreeSet::new();
    entities
        .into_iter()
        .map(Entity::id)
        .find(|id| !seen.insert(*id))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(u32);

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.0
        }
    }

    #[test]
    fn unique_ids_have_no_duplicate() {
        let rows = [Row(1), Row(2), Row(3)];
        assert_eq!(first_duplicate_id(&rows), None);
    }

    #[test]
    fn reports_first_repeated_id() {
        let rows = [Row(4), Row(7), Row(4), Row(7)];
        assert_eq!(first_duplicate_id(&rows), Some(4));
    }
}
