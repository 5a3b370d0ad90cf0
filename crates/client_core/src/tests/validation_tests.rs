use super::*;

#[test]
fn user_error_only_for_one_or_two_chars() {
    assert_eq!(user_error(""), None);
    assert_eq!(user_error("a"), Some("Muy corto"));
    assert_eq!(user_error("ab"), Some("Muy corto"));
    assert_eq!(user_error("abc"), None);
    assert_eq!(user_error("a-much-longer-name"), None);
}

#[test]
fn pass_error_only_for_one_to_five_chars() {
    assert_eq!(pass_error(""), None);
    for len in 1..=5 {
        let pass = "x".repeat(len);
        assert_eq!(pass_error(&pass), Some("Mínimo 6 caracteres"), "len {len}");
    }
    assert_eq!(pass_error("123456"), None);
    assert_eq!(pass_error("1234567890"), None);
}

#[test]
fn form_valid_iff_both_fields_long_enough() {
    for user_len in 0..6 {
        for pass_len in 0..9 {
            let user = "u".repeat(user_len);
            let pass = "p".repeat(pass_len);
            assert_eq!(
                is_form_valid(&user, &pass),
                user_len >= 3 && pass_len >= 6,
                "user_len={user_len} pass_len={pass_len}"
            );
        }
    }
}

#[test]
fn accented_letters_count_once() {
    // two code units, four bytes
    assert_eq!(user_error("ñá"), Some(USER_TOO_SHORT));
    assert_eq!(user_error("ñáé"), None);
    assert!(is_form_valid("josé", "contraseña"));
    assert_eq!(pass_error("ñññññ"), Some(PASS_TOO_SHORT));
}

#[test]
fn emoji_count_as_two_code_units() {
    assert_eq!(user_error("😀"), Some(USER_TOO_SHORT));
    assert_eq!(user_error("😀😀"), None);
    assert_eq!(pass_error("😀😀"), Some(PASS_TOO_SHORT));
    assert_eq!(pass_error("😀😀😀"), None);
    assert!(is_form_valid("😀😀", "😀😀😀"));
    assert!(!is_form_valid("😀", "😀😀😀"));
}
