use chrono::{TimeZone, Utc};
use policy_guard::redact::{redact, LogLine, LogRecord, RedactionConfig, RedactionEngine};
use policy_guard::{requires_auth, ConfigErrorKind, Credential, GuardConfig, PathPolicy};
use tracing::Level;

#[test]
fn redacts_concrete_scenario() {
    let out = redact(
        &["password", "ssn"],
        "***",
        "name=Bob;password=hunter2;ssn=123-45-6789;",
        ';',
    );

    assert_eq!(out, "name=Bob;password=***;ssn=***;");
}

#[test]
fn redacts_user_row_rendered_as_log_line() {
    let engine = RedactionConfig::pii().build().unwrap();
    let line = LogLine::new()
        .field("name", "Marlene Wood")
        .field("email", "hwestiii@att.net")
        .field("phone", "(473) 401-4253")
        .field("ssn", "261-72-6780")
        .field("password", "K5?BMNv")
        .field("ip", "60ed:c396:2ff:244:bbd0:9208:26f2:93ea")
        .field("last_login", "2019-11-14 06:14:24")
        .field("user_agent", "Mozilla/5.0")
        .finish();

    let out = engine.redact(&line);

    assert_eq!(
        out,
        "name=***; email=***; phone=***; ssn=***; password=***; \
         ip=60ed:c396:2ff:244:bbd0:9208:26f2:93ea; last_login=2019-11-14 06:14:24; \
         user_agent=Mozilla/5.0;"
    );
}

#[test]
fn formatted_record_hides_values() {
    let engine = RedactionConfig::new(["email", "ssn", "password"])
        .tag("USERS")
        .build()
        .unwrap();
    let record = LogRecord::new(
        "my_logger",
        Level::INFO,
        "name=Bob;email=bob@dylan.com;ssn=000-123-0000;password=bobbycool;",
    )
    .with_timestamp(Utc.with_ymd_and_hms(2019, 11, 19, 18, 24, 25).unwrap());

    let out = engine.format_record(&record);

    assert_eq!(
        out,
        "[USERS] my_logger INFO 2019-11-19 18:24:25,000: name=Bob;email=***;ssn=***;password=***;"
    );
    assert!(!out.contains("bobbycool"));
}

#[test]
fn misconfigured_engine_is_rejected() {
    let err = RedactionEngine::new(Vec::<&str>::new(), "***", ';').unwrap_err();
    assert_eq!(err.kind(), ConfigErrorKind::EmptyFieldSet);
}

#[test]
fn path_policy_from_config() {
    let config = GuardConfig::from_lookup(|key| match key {
        "SESSION_NAME" => Some("_my_session_id".to_string()),
        "AUTH_EXCLUDED_PATHS" => Some("/api/v1/status/,/api/v1/auth_session/login/".to_string()),
        _ => None,
    })
    .unwrap();
    let policy = PathPolicy::from_config(&config);

    assert_eq!(policy.session_cookie_name(), Some("_my_session_id"));
    assert!(!policy.requires_auth("/api/v1/status"));
    assert!(!policy.requires_auth("/api/v1/auth_session/login"));
    assert!(policy.requires_auth("/api/v1/users"));
}

#[test]
fn wildcard_and_trailing_slash_examples() {
    assert!(!requires_auth("/api/v1/status/", &["/api/v1/*"]));
    assert!(requires_auth("/api/v2/status/", &["/api/v1/*"]));
    assert!(!requires_auth("/api/v1/stat", &["/api/v1/stat/"]));
}

#[test]
fn credential_is_fully_redacted() {
    let credential = Credential::new("Bearer sk-secret123");

    let debug_out = format!("{:?}", credential);
    assert_eq!(debug_out, "[REDACTED]");
    assert!(!debug_out.contains("sk-secret"));

    let display_out = format!("{}", credential);
    assert_eq!(display_out, "[REDACTED]");
}
