//! Integration tests for the render stream

use humanize_core::{Formatter, HumanValue};
use humanize_integration_tests::fixtures::{golden_values, request_line};
use humanize_render::{run, RenderResponse, RenderedValue, RunStats};
use pretty_assertions::assert_eq;

fn render_all(input: &str) -> (RunStats, Vec<RenderResponse>) {
    let mut output = Vec::new();
    let stats = tokio_test::block_on(run(input.as_bytes(), &mut output, Formatter::DEFAULT))
        .expect("render stream failed");

    let responses = String::from_utf8(output)
        .expect("output is not UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("response is not JSON"))
        .collect();

    (stats, responses)
}

#[test]
fn test_golden_values_through_stream() {
    let goldens = golden_values();
    let input: String = goldens
        .iter()
        .map(|g| request_line(&g.value) + "\n")
        .collect();

    let (stats, responses) = render_all(&input);

    assert_eq!(stats.rendered as usize, goldens.len());
    assert_eq!(stats.failed, 0);
    for (golden, response) in goldens.iter().zip(responses) {
        assert_eq!(
            response,
            RenderResponse::Rendered(RenderedValue {
                human: golden.expected.to_string()
            })
        );
    }
}

#[test]
fn test_failures_do_not_stop_stream() {
    let input = [
        request_line(&HumanValue::Day(i32::MAX)),
        "[1, 2".to_string(),
        r#"{"type": "decade", "value": 3}"#.to_string(),
        request_line(&HumanValue::Month(-1)),
    ]
    .join("\n");

    let (stats, responses) = render_all(&input);

    assert_eq!(stats, RunStats { rendered: 1, failed: 3 });
    let codes: Vec<&str> = responses
        .iter()
        .map(|r| match r {
            RenderResponse::Failed(err) => err.error.as_str(),
            RenderResponse::Rendered(_) => "ok",
        })
        .collect();
    assert_eq!(codes, ["out_of_range", "invalid_request", "invalid_request", "ok"]);
}

#[test]
fn test_out_of_range_details_name_the_type() {
    let (_, responses) = render_all(&request_line(&HumanValue::TimestampTz(i64::MAX)));

    match &responses[0] {
        RenderResponse::Failed(err) => {
            assert_eq!(err.error, "out_of_range");
            assert_eq!(
                err.details,
                Some(serde_json::json!({ "type": "timestamp_tz" }))
            );
        }
        other => panic!("expected failure, got {:?}", other),
    }
}
