use super::Movable;

/// An aggregate root owning records of type `C`, possibly a level down
/// (a show owns seasons directly and episodes through its seasons).
pub trait Owns<C: Movable> {
    /// Children of the owner with `parent_id`, if that owner is part of this aggregate
    fn children_of(&self, parent_id: i32) -> Option<&Vec<C>>;

    fn children_of_mut(&mut self, parent_id: i32) -> Option<&mut Vec<C>>;

    /// The sibling list containing child `id`
    fn siblings_of_mut(&mut self, id: i32) -> Option<&mut Vec<C>>;

    fn child(&self, id: i32) -> Option<&C>;
}
