use contracts::sentiment::{AnalysisResponse, SentimentLabel, SentimentResult};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::analyzer::api::{analyze_sentiment, build_request};

/// Selectable models, display form "<name> - <version>". The first entry is
/// the default.
pub const MODEL_OPTIONS: [&str; 2] = ["MFNb - V1", "MFSvc - V1"];

const MIN_TEXT_LEN: usize = 5;

/// Pre-submission validation. Returns the inline message to show, or `None`
/// when the text is acceptable.
fn validate_text(text: &str) -> Option<&'static str> {
    if text.is_empty() {
        Some("Please insert some sentences to analyze.")
    } else if text.chars().count() < MIN_TEXT_LEN {
        Some("Sentence must be at least 5 characters.")
    } else {
        None
    }
}

fn badge_color(label: SentimentLabel) -> BadgeColor {
    match label {
        SentimentLabel::Positive => BadgeColor::Success,
        SentimentLabel::Neutral => BadgeColor::Warning,
        SentimentLabel::Negative => BadgeColor::Danger,
        SentimentLabel::Unknown => BadgeColor::Subtle,
    }
}

/// Outcome of the synchronous part of a submission.
#[derive(Debug, PartialEq, Eq)]
enum SubmissionStart {
    /// A request is already in flight
    Blocked,
    /// Validation failed with this inline message
    Invalid(&'static str),
    /// The request may be sent
    Started,
}

fn begin_submission(in_flight: bool, text: &str) -> SubmissionStart {
    if in_flight {
        return SubmissionStart::Blocked;
    }
    match validate_text(text) {
        Some(message) => SubmissionStart::Invalid(message),
        None => SubmissionStart::Started,
    }
}

/// Applies a settled request outcome to the result set.
///
/// Success replaces the results verbatim, in service order. Failure leaves
/// them untouched so the previous rows stay visible. Returns whether the
/// server-error notification must be shown.
fn apply_outcome(
    outcome: Result<AnalysisResponse, String>,
    results: &mut Vec<SentimentResult>,
) -> bool {
    match outcome {
        Ok(response) => {
            *results = response.data.sentiment;
            false
        }
        Err(_) => true,
    }
}

/// Row identity for the results table. Keyed on position plus content so a
/// replaced result set never reuses a row view rendered from old data.
fn row_key(index: usize, result: &SentimentResult) -> String {
    format!(
        "{}:{}:{}:{}",
        index, result.review, result.kind_of_sentiment, result.alg_type
    )
}

#[component]
pub fn SentimentAnalyzer() -> impl IntoView {
    let model = RwSignal::new(MODEL_OPTIONS[0].to_string());
    let text = RwSignal::new(String::new());
    let (results, set_results) = signal::<Vec<SentimentResult>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (validation_error, set_validation_error) = signal::<Option<&'static str>>(None);
    let (server_error, set_server_error) = signal(false);

    let submit = move || {
        let input = text.get_untracked();
        match begin_submission(loading.get_untracked(), &input) {
            SubmissionStart::Blocked => return,
            SubmissionStart::Invalid(message) => {
                set_validation_error.set(Some(message));
                return;
            }
            SubmissionStart::Started => {}
        }
        set_validation_error.set(None);

        // Loading flips before the future is spawned, so re-entry is blocked
        // even before its first poll. The disabled button alone is advisory.
        set_loading.set(true);
        set_server_error.set(false);

        spawn_local(async move {
            let request = build_request(&input, &model.get_untracked());
            let outcome = analyze_sentiment(&request).await;
            if let Err(e) = &outcome {
                log!("Sentiment analysis failed: {}", e);
            }

            let mut rows = results.get_untracked();
            let failed = apply_outcome(outcome, &mut rows);
            set_results.set(rows);
            set_server_error.set(failed);

            // Every exit path returns to idle.
            set_loading.set(false);
        });
    };

    view! {
        <Card attr:style="width: 100%; max-width: 900px; padding: 20px;">
            <h1 style="font-size: 20px; font-weight: 600; margin-bottom: 16px;">
                "🐈 Meowsenti Analyzer"
            </h1>

            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;">
                <div style="width: 180px;">
                    <Select value=model>
                        {MODEL_OPTIONS
                            .iter()
                            .map(|option| view! { <option value=*option>{*option}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <span style="font-size: 13px; color: #666;">
                    {move || format!("Total reviews analyzed: {}", results.get().len())}
                </span>
            </div>

            <div style="border: 1px solid #e0e0e0; border-radius: 12px; min-height: 260px; padding: 16px; margin-bottom: 16px;">
                {move || {
                    if loading.get() {
                        view! {
                            <div style="display: flex; flex-direction: column; gap: 12px; align-items: center; justify-content: center; height: 240px;">
                                <Spinner />
                                <span>"Analyzing sentiment from text..."</span>
                            </div>
                        }
                            .into_any()
                    } else if results.get().is_empty() {
                        view! {
                            <div style="display: flex; align-items: center; justify-content: center; height: 240px; font-size: 13px;">
                                "The result will be appears here."
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell attr:style="width: 50%;">"Text"</TableHeaderCell>
                                        <TableHeaderCell>"Sentiment"</TableHeaderCell>
                                        <TableHeaderCell>"Algorithm"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || {
                                            let rows: Vec<(usize, SentimentResult)> =
                                                results.get().into_iter().enumerate().collect();
                                            rows
                                        }
                                        key=|(index, result)| row_key(*index, result)
                                        children=move |(_, result): (usize, SentimentResult)| {
                                            let color = badge_color(result.label());
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {result.review.clone()}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <Badge appearance=BadgeAppearance::Tint color=color>
                                                            {result.kind_of_sentiment.clone()}
                                                        </Badge>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {result.alg_type.clone()}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </TableBody>
                            </Table>
                        }
                            .into_any()
                    }
                }}
            </div>

            {move || {
                server_error
                    .get()
                    .then(|| {
                        view! {
                            <div style="width: 100%; margin-bottom: 16px;">
                                <MessageBar intent=MessageBarIntent::Error>
                                    <div style="display: flex; align-items: center; gap: 12px; flex-wrap: wrap;">
                                        <span style="font-weight: 600;">"Internal Server Error"</span>
                                        <span>"Uh oh! Something went wrong in server."</span>
                                        <Button
                                            appearance=ButtonAppearance::Transparent
                                            size=ButtonSize::Small
                                            on_click=move |_| submit()
                                        >
                                            "Try again"
                                        </Button>
                                    </div>
                                </MessageBar>
                            </div>
                        }
                    })
            }}

            {move || {
                validation_error
                    .get()
                    .map(|message| {
                        view! {
                            <div style="color: #d13438; font-size: 13px; margin-bottom: 6px;">
                                {message}
                            </div>
                        }
                    })
            }}

            <textarea
                rows="6"
                placeholder="Enter one or more sentences to analyze. Separate sentences with a period."
                style="width: 100%; box-sizing: border-box; resize: none; font-size: 13px; padding: 8px; border: 1px solid #e0e0e0; border-radius: 6px;"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />

            <div style="margin-top: 16px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| submit()
                >
                    {move || if loading.get() { "Analyzing...." } else { "Analyze Sentiment" }}
                </Button>
            </div>

            <div style="margin-top: 16px; font-size: 13px; color: #888; display: flex; align-items: center; gap: 4px;">
                "Crafted with"
                <span style="color: #d13438;">"♥"</span>
                "by"
                <a
                    href="https://mframadan.dev"
                    target="_blank"
                    style="color: #047857; text-decoration: none;"
                >
                    "@mframadan.dev"
                </a>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_text_is_rejected() {
        assert_eq!(
            validate_text(""),
            Some("Please insert some sentences to analyze.")
        );
    }

    #[test]
    fn test_short_text_is_rejected() {
        assert_eq!(
            validate_text("abcd"),
            Some("Sentence must be at least 5 characters.")
        );
    }

    #[test]
    fn test_text_at_minimum_length_is_accepted() {
        assert_eq!(validate_text("abcde"), None);
        assert_eq!(validate_text("Hello world"), None);
    }

    #[test]
    fn test_badge_colors_are_exhaustive() {
        assert!(matches!(
            badge_color(SentimentLabel::Positive),
            BadgeColor::Success
        ));
        assert!(matches!(
            badge_color(SentimentLabel::Neutral),
            BadgeColor::Warning
        ));
        assert!(matches!(
            badge_color(SentimentLabel::Negative),
            BadgeColor::Danger
        ));
        assert!(matches!(
            badge_color(SentimentLabel::Unknown),
            BadgeColor::Subtle
        ));
    }

    #[test]
    fn test_default_model_is_first_option() {
        assert_eq!(MODEL_OPTIONS[0], "MFNb - V1");
    }

    fn result(alg_type: &str, kind: &str, review: &str) -> SentimentResult {
        SentimentResult {
            alg_type: alg_type.to_string(),
            kind_of_sentiment: kind.to_string(),
            review: review.to_string(),
        }
    }

    #[test]
    fn test_in_flight_submission_is_blocked() {
        assert_eq!(
            begin_submission(true, "Perfectly valid text."),
            SubmissionStart::Blocked
        );
    }

    #[test]
    fn test_invalid_text_never_starts_a_submission() {
        assert_eq!(
            begin_submission(false, "abcd"),
            SubmissionStart::Invalid("Sentence must be at least 5 characters.")
        );
        assert_eq!(
            begin_submission(false, ""),
            SubmissionStart::Invalid("Please insert some sentences to analyze.")
        );
    }

    #[test]
    fn test_valid_idle_submission_starts() {
        assert_eq!(
            begin_submission(false, "Hello world"),
            SubmissionStart::Started
        );
    }

    #[test]
    fn test_success_replaces_results_verbatim() {
        let mut rows = vec![result("X", "Positive", "old")];
        let response = AnalysisResponse {
            status: "ok".to_string(),
            data: contracts::sentiment::SentimentData {
                sentiment: vec![
                    result("X", "Negative", "bad"),
                    result("X", "Neutral", "meh"),
                ],
            },
        };

        let failed = apply_outcome(Ok(response), &mut rows);

        assert!(!failed);
        assert_eq!(
            rows,
            vec![result("X", "Negative", "bad"), result("X", "Neutral", "meh")]
        );
    }

    #[test]
    fn test_failure_retains_previous_results() {
        let previous = vec![result("X", "Positive", "good"), result("X", "Negative", "bad")];
        let mut rows = previous.clone();

        let failed = apply_outcome(Err("Analysis failed: 500".to_string()), &mut rows);

        assert!(failed);
        assert_eq!(rows, previous);
    }

    #[test]
    fn test_row_key_changes_when_row_content_changes() {
        let old = result("X", "Negative", "bad");
        let replaced = result("X", "Positive", "good");
        // Same table position, different result: the key must differ so the
        // row is rebuilt instead of reusing the view made from old data.
        assert_ne!(row_key(0, &old), row_key(0, &replaced));
        assert_eq!(row_key(0, &old), row_key(0, &old.clone()));
        // Identical sentences at different positions stay distinct rows.
        assert_ne!(row_key(0, &old), row_key(1, &old));
    }
}
