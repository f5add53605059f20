/// UseCase metadata for identification and documentation
pub trait UseCaseMetadata {
    /// UseCase index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "replenishment"
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name in the form "u501_replenishment"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
