/// Keeps `current` when it is still offered, otherwise resets it.
///
/// Run whenever the category changes, before the standard options are
/// published, so a stale standard is never shown next to an option list
/// that does not contain it.
#[must_use]
pub fn reconcile_standard<S: AsRef<str>>(available: &[S], current: Option<&str>) -> Option<String> {
    let current = current?;
    available
        .iter()
        .any(|candidate| candidate.as_ref() == current)
        .then(|| current.to_owned())
}
