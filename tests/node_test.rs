//! Integration tests for property classification and mapping.

use faultline::{Fault, FaultKind, Outcome, PropertyPath, ValidationContext};

/// A status value object; "Störung" is reserved for incident tooling.
#[derive(Debug, Clone, Default, PartialEq)]
struct Status(String);

impl Status {
    fn parse(raw: String) -> Outcome<Status> {
        if raw == "Störung" {
            Fault::conflict("STATUS_RESERVED", "status 'Störung' is reserved").into()
        } else {
            Outcome::success(Status(raw))
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum Priority {
    #[default]
    Normal,
    High,
}

impl Priority {
    fn from_flag(urgent: bool) -> Self {
        if urgent {
            Priority::High
        } else {
            Priority::Normal
        }
    }
}

fn root() -> PropertyPath {
    let mut path = PropertyPath::root();
    path.push_property("ticket");
    path
}

#[test]
fn test_required_present_maps_and_restores_path() {
    let mut path = root();
    let mut ctx = ValidationContext::new(&mut path);

    let status = ctx
        .property("status", Some("Open".to_string()))
        .required()
        .map_try(Status::parse);

    assert_eq!(status, Status("Open".to_string()));
    assert!(!ctx.has_failed());
    assert_eq!(ctx.path().current(), "ticket");
}

#[test]
fn test_required_absent_records_missing_fault() {
    let mut path = root();
    let mut ctx = ValidationContext::new(&mut path);

    let status = ctx
        .property("status", None::<String>)
        .required()
        .map_try(Status::parse);

    assert_eq!(status, Status::default());
    let faults = ctx.outcome().faults();
    assert_eq!(faults.len(), 1);
    assert_eq!(
        faults[0],
        Fault::validation("TICKET_STATUS_MISSING", "ticket.status is required.")
    );
    assert_eq!(ctx.path().current(), "ticket");
}

#[test]
fn test_optional_absent_has_no_fault() {
    let mut path = root();
    let mut ctx = ValidationContext::new(&mut path);

    let status = ctx
        .property("status", None::<String>)
        .optional()
        .map_try(Status::parse);

    assert_eq!(status, None);
    assert!(!ctx.has_failed());
}

#[test]
fn test_defaulted_absent_uses_default() {
    let mut path = root();
    let mut ctx = ValidationContext::new(&mut path);

    let priority = ctx
        .property("urgent", None::<bool>)
        .with_default(true)
        .map_with(Priority::from_flag);

    assert_eq!(priority, Priority::High);
    assert!(!ctx.has_failed());
}

#[test]
fn test_defaulted_present_ignores_default() {
    let mut path = root();
    let mut ctx = ValidationContext::new(&mut path);

    let priority = ctx
        .property("urgent", Some(false))
        .with_default(true)
        .map_with(Priority::from_flag);

    assert_eq!(priority, Priority::Normal);
}

#[test]
fn test_failing_factory_reports_only_its_fault() {
    let mut path = root();
    let mut ctx = ValidationContext::new(&mut path);

    let status = ctx
        .property("status", Some("Störung".to_string()))
        .required()
        .map_try(Status::parse);

    assert_eq!(status, Status::default());
    let faults = ctx.outcome().faults();
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].kind(), FaultKind::Conflict);
    assert_eq!(faults[0].code(), "STATUS_RESERVED");
    assert!(ctx.outcome().codes().iter().all(|c| !c.ends_with("MISSING")));
}

#[test]
fn test_failing_factory_on_optional_yields_none() {
    let mut path = root();
    let mut ctx = ValidationContext::new(&mut path);

    let status = ctx
        .property("status", Some("Störung".to_string()))
        .optional()
        .map_try(Status::parse);

    assert_eq!(status, None);
    assert_eq!(ctx.outcome().codes(), vec!["STATUS_RESERVED"]);
}

#[test]
fn test_direct_mapping_is_identity() {
    let mut path = root();
    let mut ctx = ValidationContext::new(&mut path);

    let title: String = ctx.property("title", Some("Printer on fire".to_string())).required().map();
    let note = ctx.property("note", None::<String>).optional().map();

    assert_eq!(title, "Printer on fire");
    assert_eq!(note, None);
}

#[test]
fn test_nested_faults_carry_full_path() {
    let mut path = root();
    let mut ctx = ValidationContext::new(&mut path);

    let reporter: Option<String> = ctx
        .property("reporter", Some(("Ada".to_string(), None::<String>)))
        .optional()
        .map_complex(|(name, email), path| {
            let mut nested = ValidationContext::new(path);
            let email: String = nested.property("email", email).required().map();
            nested.finish(format!("{name} <{email}>"))
        });

    assert_eq!(reporter, None);
    assert_eq!(ctx.outcome().codes(), vec!["TICKET_REPORTER_EMAIL_MISSING"]);
    assert_eq!(ctx.path().current(), "ticket");
}

#[test]
fn test_independent_fields_all_evaluated() {
    let mut path = PropertyPath::root();
    let mut ctx = ValidationContext::new(&mut path);

    let _: String = ctx.property("a", None::<String>).required().map();
    let _ = ctx
        .property("b", Some("Störung".to_string()))
        .optional()
        .map_try(Status::parse);
    let _: i32 = ctx.property("c", None::<i32>).required().map();

    assert_eq!(
        ctx.outcome().codes(),
        vec!["A_MISSING", "STATUS_RESERVED", "C_MISSING"]
    );
}
