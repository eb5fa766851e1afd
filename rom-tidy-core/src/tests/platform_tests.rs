use super::*;

#[test]
fn dir_names_round_trip() {
    for &platform in Platform::all() {
        let parsed: Platform = platform.dir_name().parse().unwrap();
        assert_eq!(parsed, platform, "round-trip failed for {:?}", platform);
    }
}

#[test]
fn extensions_map_back_to_platform() {
    for &platform in Platform::all() {
        assert_eq!(Platform::from_extension(platform.extension()), Some(platform));
    }
}

#[test]
fn extension_match_is_case_sensitive() {
    assert_eq!(Platform::from_extension("nes"), Some(Platform::Nes));
    assert_eq!(Platform::from_extension("NES"), None);
    assert_eq!(Platform::from_extension("Smc"), None);
}

#[test]
fn unknown_extension_is_none() {
    assert_eq!(Platform::from_extension("zip"), None);
    assert_eq!(Platform::from_extension(""), None);
}

#[test]
fn aliases_resolve_correctly() {
    let cases = [
        ("sfc", Platform::Snes),
        ("mega drive", Platform::Genesis),
        ("gen", Platform::Genesis),
        ("z64", Platform::N64),
        ("gameboy", Platform::GameBoy),
        ("GBC", Platform::GameBoyColor),
        ("famicom", Platform::Nes),
    ];
    for (input, expected) in cases {
        let parsed: Platform = input.parse().unwrap();
        assert_eq!(
            parsed, expected,
            "alias '{}' should parse to {:?}",
            input, expected
        );
    }
}

#[test]
fn unknown_string_returns_err() {
    let result: Result<Platform, _> = "commodore64".parse();
    assert!(result.is_err());
}

#[test]
fn dir_name_is_first_alias() {
    for &platform in Platform::all() {
        assert_eq!(
            platform.dir_name(),
            platform.aliases()[0],
            "dir_name should be first alias for {:?}",
            platform,
        );
    }
}

#[test]
fn display_returns_display_name() {
    assert_eq!(Platform::Nes.to_string(), "Nintendo Entertainment System");
    assert_eq!(Platform::Genesis.to_string(), "Sega Genesis / Mega Drive");
}
