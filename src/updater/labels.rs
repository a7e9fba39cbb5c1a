/// Checks that the pull request carries every required label.
/// Label names are compared case-insensitively. An empty `required` set matches
/// every pull request.
pub fn has_all_labels<R: AsRef<str>, L: AsRef<str>>(required: &[R], labels: &[L]) -> bool {
    required.iter().all(|required| {
        let required = required.as_ref().to_lowercase();
        labels
            .iter()
            .any(|label| label.as_ref().to_lowercase() == required)
    })
}
