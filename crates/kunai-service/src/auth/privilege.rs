//! `DAV:supported-privilege-set` generation.

use std::fmt::Write;

use tracing_unwrap::ResultExt;

use super::capability::Capability;

/// Privileges advertised to clients, `all` first. Every other entry is aggregated by `all`.
pub const SUPPORTED_PRIVILEGES: [Capability; 6] = [
    Capability::All,
    Capability::Read,
    Capability::Write,
    Capability::Bind,
    Capability::Unbind,
    Capability::WriteContent,
];

/// ## Summary
/// Generates the `DAV:supported-privilege-set` element (RFC 3744 §5.3).
///
/// The privileges after `all` are nested inside it as aggregated privileges.
#[must_use]
pub fn supported_privilege_set_xml() -> String {
    let mut xml = String::from(r#"<D:supported-privilege-set xmlns:D="DAV:">"#);

    let [root, aggregated @ ..] = SUPPORTED_PRIVILEGES;
    write!(
        xml,
        "<D:supported-privilege><D:privilege><D:{root}/></D:privilege>"
    )
    .ok_or_log();
    for privilege in aggregated {
        write!(
            xml,
            "<D:supported-privilege><D:privilege><D:{privilege}/></D:privilege></D:supported-privilege>"
        )
        .ok_or_log();
    }
    xml.push_str("</D:supported-privilege></D:supported-privilege-set>");

    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_privileges_nest_under_all() {
        let xml = supported_privilege_set_xml();
        assert!(xml.starts_with(
            "<D:supported-privilege-set xmlns:D=\"DAV:\"><D:supported-privilege><D:privilege><D:all/></D:privilege>"
        ));
        for name in ["read", "write", "bind", "unbind", "write-content"] {
            assert!(xml.contains(&format!("<D:privilege><D:{name}/></D:privilege>")), "{name}");
        }
        assert!(!xml.contains("freebusy"));
        assert_eq!(xml.matches("<D:supported-privilege>").count(), 6);
        assert!(xml.ends_with("</D:supported-privilege></D:supported-privilege-set>"));
    }
}
