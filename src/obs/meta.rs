//! Project meta XML handling
//!
//! The OBS `/source/<project>/_meta` endpoint answers with an XML document
//! whose root is `<project name="...">`. Only the name attribute matters
//! here, so it is extracted directly instead of pulling in an XML parser.

/// Extract the project name attribute from a `_meta` XML document.
///
/// Returns `None` if no `<project>` root element with a quoted `name`
/// attribute is present.
pub fn parse_project_name(xml: &str) -> Option<String> {
    let tag_start = xml.find("<project")?;
    let tag = &xml[tag_start..];
    let tag_end = tag.find('>')?;
    let attrs = &tag[..tag_end];

    // Must be the name attribute itself, not a suffix match like "username="
    let name_pos = attrs.match_indices("name=").find_map(|(pos, _)| {
        let preceded_by_space = attrs[..pos]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        preceded_by_space.then_some(pos)
    })?;
    let after_eq = &attrs[name_pos + "name=".len()..];

    let quote = after_eq.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    let value = &after_eq[1..];
    let close = value.find(quote)?;

    let name = &value[..close];
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
