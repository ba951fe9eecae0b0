//! Extraction coverage over the full set of expected function names, plus
//! property-based checks for the reindent rule.

use espsplit::splitter::extractor::{extract_function_body, ExtractError};
use espsplit::splitter::plan::{INIT_FUNCTION, STEPS};
use espsplit::splitter::rules::REINDENT;
use proptest::prelude::*;
use rstest::rstest;

/// Well-formed source containing exactly the nine expected headers, each
/// with a trivial body ending in a return statement.
const FIXTURE: &str = r#"class ESPThreadSetup:
    def __init__(self):
        self.home_dir = "/home/dev"
        self.cli_port = None

    def check_prerequisites(self):
        print("step")
        return True

    def download_repositories(self):
        print("step")
        return True

    def build_rcp_firmware(self):
        print("step")
        return True

    def setup_border_router(self):
        print("step")
        return True

    def build_and_flash_cli(self):
        print("step")
        return True

    def create_dataset(self):
        print("step")
        return True

    def configure_cli(self):
        print("step")
        return True

    def setup_web_gui(self):
        print("step")
        return False
"#;

#[rstest]
#[case(INIT_FUNCTION)]
#[case("check_prerequisites")]
#[case("download_repositories")]
#[case("build_rcp_firmware")]
#[case("setup_border_router")]
#[case("build_and_flash_cli")]
#[case("create_dataset")]
#[case("configure_cli")]
#[case("setup_web_gui")]
fn every_expected_name_extracts_a_clean_body(#[case] name: &str) {
    let body = extract_function_body(FIXTURE, name).unwrap();
    assert!(!body.is_empty(), "{} extracted an empty body", name);
    // Never the header line itself, never the next definition's header.
    assert!(!body.contains(&format!("def {}(self):", name)));
    assert!(!body.contains("def "), "{} body leaked a definition header", name);
}

#[test]
fn plan_names_match_the_fixture() {
    // The step table and the nine-header fixture agree; a typo in either
    // shows up here rather than in a confusing end-to-end failure.
    for step in &STEPS {
        assert!(
            FIXTURE.contains(&format!("def {}(self):", step.function)),
            "fixture lacks {}",
            step.function
        );
    }
}

#[test]
fn unexpected_name_is_a_distinguishable_error() {
    let err = extract_function_body(FIXTURE, "flash_all_the_things").unwrap_err();
    assert_eq!(
        err,
        ExtractError::FunctionNotFound("flash_all_the_things".to_string())
    );
}

/// Lines already at the target depth: zero or one 4-space unit, content
/// without spaces, so no 8-space run can occur anywhere.
fn target_depth_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (0usize..=1, "[a-z_()=.]{1,12}"),
        1..20,
    )
    .prop_map(|lines| {
        lines
            .into_iter()
            .map(|(depth, content)| format!("{}{}", "    ".repeat(depth), content))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

proptest! {
    #[test]
    fn reindent_is_idempotent_on_target_depth_text(text in target_depth_text()) {
        // No instance of the source pattern: applying the rule changes nothing,
        // and applying it twice equals applying it once.
        let once = REINDENT.apply(&text);
        prop_assert_eq!(&once, &text);
        let twice = REINDENT.apply(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn reindent_never_changes_non_whitespace(text in "[ a-z\n]{0,64}") {
        let out = REINDENT.apply(&text);
        let strip = |s: &str| s.chars().filter(|c| *c != ' ').collect::<String>();
        prop_assert_eq!(strip(&out), strip(&text));
    }
}
