use serde::{Deserialize, Deserializer};

/// A catalog record with an identity and a display position.
///
/// Identity is `None` until the record is first persisted. Position is `None`
/// only for a fresh duplicate that has not been reindexed yet.
pub trait Movable: Clone + Send + Sync + 'static {
    fn id(&self) -> Option<i32>;
    fn set_id(&mut self, id: Option<i32>);
    fn position(&self) -> Option<i32>;
    fn set_position(&mut self, position: Option<i32>);

    /// Reindex owned child collections (and theirs). Leaf records have none.
    fn reindex_children(&mut self) {}

    /// Drop identities of all owned children, keeping their order
    fn clear_child_ids(&mut self) {}

    /// Deep copy without identities; the copy's own position is unset
    fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.set_id(None);
        copy.set_position(None);
        copy.clear_child_ids();
        copy
    }
}

/// Implements [`Movable`] for a record with `id` and `position` fields and no children
#[macro_export]
macro_rules! impl_movable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::shared::domain::Movable for $ty {
                fn id(&self) -> Option<i32> {
                    self.id
                }

                fn set_id(&mut self, id: Option<i32>) {
                    self.id = id;
                }

                fn position(&self) -> Option<i32> {
                    self.position
                }

                fn set_position(&mut self, position: Option<i32>) {
                    self.position = position;
                }
            }
        )+
    };
}

/// Child collections may be stored or cached as `null`; read them as empty
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
