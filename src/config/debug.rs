//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit a summary of both chart specs once they are built.
    pub print_chart_specs: bool,
    /// Emit animator lifecycle events (labels started, skipped, all settled).
    pub print_animator_events: bool,
    /// Emit the slice index under the pointer while hovering the doughnut.
    pub print_hover_hits: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_chart_specs: false,
    print_animator_events: false,
    print_hover_hits: false,
    print_shutdown: false,
};
