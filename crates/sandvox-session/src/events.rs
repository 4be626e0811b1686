//! Discrete input events consumed by the session.

/// A named input event from the device layer.
///
/// The window/input glue translates raw key and button events into these;
/// the session never sees device-specific types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Primary pointer button: place a block against the hovered face.
    PlaceRequested,
    /// Secondary pointer button: remove the hovered block.
    RemoveRequested,
    /// Numeric hotkey `1..=n`: select the block kind in that slot.
    SelectSlot(usize),
    /// Toggle pointer-lock mode.
    ToggleCursorLock,
    /// Quit the session.
    Quit,
}
