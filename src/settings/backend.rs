//! Settings collaborator contract.
//!
//! The search screen reads a handful of user preferences when its state is
//! seeded and bumps a search counter when a query is submitted. The host owns
//! the real preference store; this trait is the narrow slice the controller
//! is allowed to see, injected at construction instead of reached through a
//! process-wide accessor.
//!
//! Methods take `&self` because the controller shares one settings handle with
//! the host for the whole lifetime of the screen. Implementations that persist
//! to disk log write failures and carry on; a failed write must never abort a
//! user gesture.

/// User preferences consulted by the search screen.
pub trait SearchSettings {
    /// Whether search suggestions are enabled at all.
    fn should_show_search_suggestions(&self) -> bool;

    /// Whether the user opted in to search suggestions while browsing privately.
    fn should_show_search_suggestions_in_private(&self) -> bool;

    /// Whether the one-time private-mode suggestions prompt was already answered.
    fn search_suggestions_in_private_onboarding_finished(&self) -> bool;

    /// Whether the shortcut engine picker opens together with the search screen.
    fn should_show_search_shortcuts(&self) -> bool;

    /// Number of searches the user submitted so far.
    fn active_search_count(&self) -> u64;

    /// Records one more submitted search.
    fn increment_active_search_count(&self);

    /// Answers the private-mode suggestions prompt.
    fn set_show_search_suggestions_in_private(&self, enabled: bool);

    /// Marks the private-mode suggestions prompt as seen.
    fn set_search_suggestions_in_private_onboarding_finished(&self, finished: bool);
}
