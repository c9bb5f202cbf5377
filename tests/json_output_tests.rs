mod common;
use common::{GeodistTest, pair_with_format};

#[test]
fn test_json_shape_without_inputs() {
    let output = pair_with_format("26.86296° N, 81.04288° E", "26.86343° N, 81.04136° E", "json")
        .get_output();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "{\"meters\":159.58,\"kilometers\":0.16}\n");
}

#[test]
fn test_json_with_inputs() {
    pair_with_format("12.5° S, 45.0° W", "12.5° S, 45.0° W", "json")
        .arg("--show-inputs")
        .assert_success_contains_all(&[
            "\"latitude1\":-12.5",
            "\"longitude1\":-45",
            "\"latitude2\":-12.5",
            "\"longitude2\":-45",
            "\"meters\":0",
            "\"kilometers\":0",
        ]);
}

#[test]
fn test_json_is_one_object_per_line() {
    let input = "0.0° N, 0.0° E ; 0.0° N, 1.0° E\n0.0° N, 0.0° E ; 0.0° N, 2.0° E\n";
    let output = GeodistTest::new()
        .args(["--format=json", "--no-show-inputs", "@-"])
        .stdin(input)
        .get_output();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert!(line.starts_with('{') && line.ends_with('}'));
    }
}

#[test]
fn test_json_zero_distance_is_exactly_zero() {
    let output = pair_with_format("5.0° N, 5.0° E", "5.0° N, 5.0° E", "json").get_output();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"meters\":0,"), "stdout: {}", stdout);
}

#[test]
fn test_json_does_not_emit_headers_option_noise() {
    // --no-headers only affects CSV; JSON output is unchanged by it
    let with = pair_with_format("0.0° N, 0.0° E", "0.0° N, 1.0° E", "json")
        .arg("--no-headers")
        .get_output();
    let without = pair_with_format("0.0° N, 0.0° E", "0.0° N, 1.0° E", "json").get_output();
    assert_eq!(with.stdout, without.stdout);
}
