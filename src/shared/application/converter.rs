/// A transfer record exchanged with facade callers
pub trait TransferRecord: Send + Sync + 'static {
    fn id(&self) -> Option<i32>;
}

/// Copy the editable fields of a transfer record onto a stored entity,
/// keeping its identity, position and owned children.
pub trait UpdateFrom<D> {
    fn apply(&mut self, dto: D);
}

/// Implements [`TransferRecord`] for DTOs with an `id: Option<i32>` field
#[macro_export]
macro_rules! impl_transfer_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::shared::application::TransferRecord for $ty {
                fn id(&self) -> Option<i32> {
                    self.id
                }
            }
        )+
    };
}
