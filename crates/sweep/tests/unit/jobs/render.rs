//! # Script Rendering Tests
//!
//! Golden comparison of a rendered job script, scheduler preamble
//! placement, `%e` formatting, and output naming.

use pretty_assertions::assert_eq;
use rstest::rstest;
use smtsim_sweep::config::{NamingScheme, Scheduler};
use smtsim_sweep::jobs::{CoreConfig, create_configurations, format_exponent, output_name, render_script};

use crate::common::{APPLU_C0_GOLDEN, fixture_config};

#[test]
fn test_render_matches_golden() {
    let config = fixture_config();
    let c0 = create_configurations()[0];

    let script = render_script(&config, "applu", &c0, "applu");
    assert_eq!(script, APPLU_C0_GOLDEN);
}

#[test]
fn test_render_is_pure() {
    let config = fixture_config();
    let c0 = create_configurations()[0];

    let first = render_script(&config, "applu", &c0, "applu");
    let second = render_script(&config, "applu", &c0, "applu");
    assert_eq!(first, second);
}

#[test]
fn test_render_differs_only_in_substituted_lines() {
    let config = fixture_config();
    let c0 = create_configurations()[0];
    let variant = CoreConfig {
        reorder_buffer_size: 32,
        fetch_width: 4,
        ..c0
    };

    let base = render_script(&config, "applu", &c0, "applu");
    let other = render_script(&config, "applu", &variant, "applu");

    let base_lines: Vec<&str> = base.lines().collect();
    let other_lines: Vec<&str> = other.lines().collect();
    assert_eq!(base_lines.len(), other_lines.len());

    let changed: Vec<&str> = base_lines
        .iter()
        .zip(&other_lines)
        .filter(|(a, b)| a != b)
        .map(|(_, b)| b.trim())
        .collect();
    assert_eq!(
        changed,
        vec![
            r#"-confexpr "Core/Fetch/single_limit = 4;" \"#,
            r#"-confexpr "Core/Fetch/total_limit = 4;" \"#,
            r#"-confexpr "Thread/reorder_buffer_size = 32;" \"#,
            r#"-confexpr "Thread/active_list_size = 256;" \"#,
        ]
    );
}

#[test]
fn test_render_substitutes_workload_and_output() {
    let config = fixture_config();
    let c0 = create_configurations()[0];

    let script = render_script(&config, "bwaves_06", &c0, "bwaves_06");
    assert!(script.contains(r#"-confexpr "Workloads/bwaves_06/ff_dist = 1.000000e+06;" \"#));
    assert!(script.contains(r#"workload = \"bwaves_06\"};"\"#));
    assert!(script.contains(r#"AppStatsLog/base_name = \"/sim/results/one_core/bwaves_06\";"#));
    assert!(script.contains(r#"-confdump - > "/sim/results/one_core/bwaves_06""#));
    assert!(!script.contains("applu"));
}

#[test]
fn test_render_thread_length() {
    let mut config = fixture_config();
    config.thread_length = 5e7;
    let c0 = create_configurations()[0];

    let script = render_script(&config, "applu", &c0, "applu");
    assert!(script.contains(r#"-confexpr "Global/thread_length = 5.000000e+07;" \"#));
}

#[test]
fn test_render_without_scheduler_has_no_preamble() {
    let config = fixture_config();
    let c0 = create_configurations()[0];

    let script = render_script(&config, "applu", &c0, "applu");
    assert!(script.starts_with("#!/bin/bash\n\n\ncd \"/sim/benchmarks/alltogether\"\n"));
    assert!(!script.contains("#PBS"));
}

#[test]
fn test_render_pbs_preamble_after_shebang() {
    let mut config = fixture_config();
    config.scheduler = Scheduler::pbs();
    let c0 = create_configurations()[0];

    let script = render_script(&config, "applu", &c0, "applu");
    let expected_head = "#!/bin/bash\n#PBS -l walltime=5:00:00\n#PBS -q express\n#PBS -S /bin/bash\n\n\ncd ";
    assert!(script.starts_with(expected_head), "got: {}", &script[..120]);

    // The rest of the script is untouched by the preamble.
    let plain = render_script(&fixture_config(), "applu", &c0, "applu");
    assert_eq!(
        script.lines().skip(4).collect::<Vec<_>>(),
        plain.lines().skip(1).collect::<Vec<_>>()
    );
}

#[test]
fn test_render_propagates_exit_status_check() {
    let config = fixture_config();
    let c0 = create_configurations()[0];

    let script = render_script(&config, "applu", &c0, "applu");
    assert!(script.ends_with("[ $? -eq 0 ]||echo \"Error: App did not exit normally\"\n"));
}

#[rstest]
#[case(1e6, "1.000000e+06")]
#[case(5e7, "5.000000e+07")]
#[case(0.0, "0.000000e+00")]
#[case(1.0, "1.000000e+00")]
#[case(123_456.0, "1.234560e+05")]
#[case(2.5e-3, "2.500000e-03")]
#[case(-4.0e10, "-4.000000e+10")]
#[case(1e100, "1.000000e+100")]
fn test_format_exponent(#[case] value: f64, #[case] expected: &str) {
    assert_eq!(format_exponent(value), expected);
}

#[test]
fn test_format_exponent_non_finite() {
    assert_eq!(format_exponent(f64::INFINITY), "inf");
    assert_eq!(format_exponent(f64::NEG_INFINITY), "-inf");
    assert_eq!(format_exponent(f64::NAN), "nan");
}

#[test]
fn test_output_name_workload() {
    let c0 = create_configurations()[0];
    assert_eq!(output_name("applu", &c0, NamingScheme::Workload), "applu");
}

#[test]
fn test_output_name_parameters() {
    let c0 = create_configurations()[0];
    assert_eq!(
        output_name("applu", &c0, NamingScheme::Parameters),
        "applu@iqs=24@fqs=24@ipr=32@fpr=32@rob=64@lsq=16@ics=32@dcs=32_211@fb=8@mci=4@l3=8MB"
    );
}
