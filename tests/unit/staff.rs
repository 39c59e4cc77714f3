use roster_backend::validation::staff::validate_staff_code;

#[test]
fn accepts_alphanumeric_codes_of_five_or_more() {
    assert!(validate_staff_code("NUR01").is_ok());
    assert!(validate_staff_code("DOC12345").is_ok());
}

#[test]
fn rejects_short_codes() {
    assert!(validate_staff_code("AB12").is_err());
    assert!(validate_staff_code("").is_err());
}

#[test]
fn rejects_non_alphanumeric_codes() {
    assert!(validate_staff_code("NUR-01").is_err());
    assert!(validate_staff_code("NUR 01").is_err());
}
