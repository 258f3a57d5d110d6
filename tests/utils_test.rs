use spanalyze::spotify::parse_retry_after;
use spanalyze::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // SHA256 digest encoded URL-safe without padding
    assert_eq!(challenge.len(), 43);
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(999), "0:00");
    assert_eq!(format_duration(61_000), "1:01");
    assert_eq!(format_duration(150_000), "2:30");

    // Minutes are not wrapped into hours
    assert_eq!(format_duration(3_723_000), "62:03");
}

#[test]
fn test_div_round_half_up() {
    assert_eq!(div_round_half_up(141, 2), 71);
    assert_eq!(div_round_half_up(140, 2), 70);
    assert_eq!(div_round_half_up(10, 3), 3);
    assert_eq!(div_round_half_up(11, 3), 4);
    assert_eq!(div_round_half_up(5, 0), 0);
}

#[test]
fn test_normalize_tempo() {
    assert_eq!(normalize_tempo(60.0), 0.0);
    assert_eq!(normalize_tempo(130.0), 0.5);
    assert_eq!(normalize_tempo(200.0), 1.0);

    // Out of range tempos are clamped
    assert_eq!(normalize_tempo(40.0), 0.0);
    assert_eq!(normalize_tempo(260.0), 1.0);
}

#[test]
fn test_render_bar() {
    assert_eq!(render_bar(0.0, 4), "░░░░");
    assert_eq!(render_bar(0.5, 4), "██░░");
    assert_eq!(render_bar(1.7, 4), "████");
}

#[test]
fn test_lookup_query() {
    assert_eq!(lookup_query("Song", Some("Artist")), "Song Artist");
    assert_eq!(lookup_query("Song", None), "Song");
    assert_eq!(lookup_query("Song", Some("")), "Song");
}

#[test]
fn test_parse_selection() {
    assert_eq!(parse_selection("1\n", 3), Ok(0));
    assert_eq!(parse_selection(" 3 ", 3), Ok(2));
    assert!(parse_selection("0", 3).is_err());
    assert!(parse_selection("4", 3).is_err());
    assert!(parse_selection("abc", 3).is_err());
}

#[test]
fn test_parse_retry_after() {
    assert_eq!(parse_retry_after(Some("7")), 7);
    assert_eq!(parse_retry_after(Some(" 30 ")), 30);
    assert_eq!(parse_retry_after(Some("soon")), 1);
    assert_eq!(parse_retry_after(None), 1);
}
