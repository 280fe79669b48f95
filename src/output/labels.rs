//! Display labels for declaration nodes

/// Shorten a declaration description for display inside its package cluster.
///
/// The declared name is taken to run from after the first space up to the
/// next space or parenthesis. Its package qualifier is removed from the whole
/// label, and with `trim_structs` a struct body collapses to `struct{...}`.
pub fn display_label(declared: &str, trim_structs: bool) -> String {
    let name_start = declared.find(' ').map(|i| i + 1).unwrap_or(0);
    let name_end = declared
        .get(name_start + 1..)
        .and_then(|rest| rest.find(|c: char| c == ' ' || c == '('))
        .map(|i| name_start + 1 + i)
        .unwrap_or(declared.len());

    let mut label = declared.to_string();
    if trim_structs && declared[name_end..].trim_start().starts_with("struct{") {
        label = format!("{} struct{{...}}", &declared[..name_end]);
    }

    if let Some(dot) = declared[name_start..name_end].rfind('.') {
        let qualifier = &declared[name_start..name_start + dot + 1];
        label = format!("{}{}", &label[..name_start], &label[name_start + dot + 1..]);
        label = label.replace(qualifier, "");
    }

    label
}
