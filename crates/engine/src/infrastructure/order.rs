//! The reorder step shared by the storage adapters.

/// Moves `item_id` to `new_index` within `order`.
///
/// The index is clamped to the array length *after* removal, so an oversized
/// index means append-at-end rather than an out-of-bounds error. Returns
/// false when `item_id` is not present in `order`, which covers both an
/// empty list and an id that belongs to some other wishlist.
pub(crate) fn move_to_index<T: PartialEq>(order: &mut Vec<T>, item_id: &T, new_index: usize) -> bool {
    let Some(position) = order.iter().position(|id| id == item_id) else {
        return false;
    };
    let id = order.remove(position);
    let index = new_index.min(order.len());
    order.insert(index, id);
    true
}
