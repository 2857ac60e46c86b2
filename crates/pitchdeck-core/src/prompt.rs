//! Prompt templates for the two generation steps.
//!
//! Both builders are pure string interpolation into fixed templates.
//! The templates begin and end with a newline.

/// Build the researcher prompt for an idea summary.
///
/// Asks for target market size, key industry trends, the top three
/// competitors, and a SWOT analysis.
pub fn research_prompt(idea: &str) -> String {
    format!(
        "
You are a startup researcher.

Based on the idea below, write:
1. Target market size
2. Key industry trends
3. Top 3 competitors
4. SWOT analysis

Startup Idea:
{idea}
"
    )
}

/// Build the copywriter prompt from the research text and the idea summary.
///
/// Asks for a tagline, the problem & solution story, the unique value
/// proposition, a go-to-market strategy, and "why now".
pub fn copywriter_prompt(research: &str, idea: &str) -> String {
    format!(
        "
You're a pitch deck copywriter.

Using the idea and research below, write:
- Tagline
- Problem & solution story
- Unique value proposition
- Go-to-market strategy
- Why now

Startup Idea: {idea}

Research: {research}
"
    )
}
