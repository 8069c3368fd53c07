//! Render dispatch
//!
//! Pure mapping from a block to its HTML presentation in two modes.
//! Rendering never fails: a block whose type has no registered schema
//! (or whose content does not match its type) renders a labeled
//! fallback instead.

pub mod embed;

use crate::block::{Block, Lesson};
use crate::content::{
    BlockContent, ChoiceComparisonContent, CodeContent, ImageContent, InteractiveContent,
    ListContent, ListStyle, PollContent, TextContent, VideoContent, WordCloudContent,
};
use crate::types::BlockType;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Rendering audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Author-side preview with functional input surfaces.
    Preview,
    /// Learner-facing published output.
    Published,
}

/// Render one block.
pub fn render(block: &Block, mode: RenderMode) -> String {
    match (&block.block_type, &block.content) {
        (BlockType::Text, BlockContent::Text(text)) => render_text(text),
        (BlockType::Video, BlockContent::Video(video)) => render_video(video),
        (BlockType::Image, BlockContent::Image(image)) => render_image(image),
        (BlockType::Code, BlockContent::Code(code)) => render_code(code),
        (BlockType::List, BlockContent::List(list)) => render_list(list),
        (BlockType::Divider, BlockContent::Divider) => "<hr class=\"block-divider\">\n".to_string(),
        (BlockType::Poll, BlockContent::Poll(poll)) => render_poll(poll, mode),
        (BlockType::WordCloud, BlockContent::WordCloud(cloud)) => render_word_cloud(cloud, mode),
        (BlockType::ChoiceComparison, BlockContent::ChoiceComparison(comparison)) => {
            render_choice_comparison(comparison, mode)
        }
        (block_type, BlockContent::Interactive(interactive))
            if block_type.uses_generic_content() =>
        {
            render_interactive(block_type, interactive, mode)
        }
        // Unknown types and type/content mismatches degrade to a
        // labeled fallback; this path is first-class, not an error.
        _ => render_unknown(block),
    }
}

/// Render a whole lesson, sorted by block order.
pub fn render_lesson(lesson: &Lesson, mode: RenderMode) -> String {
    let mut output = String::new();
    for block in lesson.blocks_ordered() {
        output.push_str(&render(block, mode));
    }
    output
}

fn render_text(text: &TextContent) -> String {
    // Stored markup is trusted author content, emitted verbatim.
    format!("<div class=\"block block-text\">{}</div>\n", text.text)
}

fn render_video(video: &VideoContent) -> String {
    let mut output = String::from("<div class=\"block block-video\">\n");
    if let Some(title) = &video.title {
        output.push_str(&format!("  <h3>{}</h3>\n", encode_text(title)));
    }
    match embed::resolve_embed_url(video.video_provider, &video.video_url) {
        Some(embed_url) => {
            output.push_str(&format!(
                "  <iframe src=\"{}\" allowfullscreen></iframe>\n",
                encode_double_quoted_attribute(&embed_url)
            ));
        }
        None => {
            output.push_str(&format!(
                "  <video controls src=\"{}\"></video>\n",
                encode_double_quoted_attribute(&video.video_url)
            ));
        }
    }
    if let Some(description) = &video.description {
        output.push_str(&format!("  <p>{}</p>\n", encode_text(description)));
    }
    output.push_str("</div>\n");
    output
}

fn render_image(image: &ImageContent) -> String {
    let mut output = String::from("<figure class=\"block block-image\">\n");
    output.push_str(&format!(
        "  <img src=\"{}\" alt=\"{}\">\n",
        encode_double_quoted_attribute(&image.image_url),
        encode_double_quoted_attribute(&image.alt_text)
    ));
    if let Some(caption) = &image.caption {
        output.push_str(&format!(
            "  <figcaption>{}</figcaption>\n",
            encode_text(caption)
        ));
    }
    output.push_str("</figure>\n");
    output
}

fn render_code(code: &CodeContent) -> String {
    format!(
        "<pre class=\"block block-code\"><code class=\"language-{}\">{}</code></pre>\n",
        code.language.code(),
        encode_text(&code.code)
    )
}

fn render_list(list: &ListContent) -> String {
    let mut output = String::new();
    match list.list_type {
        ListStyle::Bullet => {
            output.push_str("<ul class=\"block block-list\">\n");
            for item in &list.items {
                output.push_str(&format!("  <li>{}</li>\n", encode_text(&item.text)));
            }
            output.push_str("</ul>\n");
        }
        ListStyle::Numbered => {
            output.push_str("<ol class=\"block block-list\">\n");
            for item in &list.items {
                output.push_str(&format!("  <li>{}</li>\n", encode_text(&item.text)));
            }
            output.push_str("</ol>\n");
        }
        ListStyle::Checkbox => {
            output.push_str("<ul class=\"block block-list block-checklist\">\n");
            for item in &list.items {
                let checked = item.checked.unwrap_or(false);
                let marker = if checked {
                    "<input type=\"checkbox\" checked disabled>"
                } else {
                    "<input type=\"checkbox\" disabled>"
                };
                let text = encode_text(&item.text);
                if checked {
                    output.push_str(&format!("  <li>{} <s>{}</s></li>\n", marker, text));
                } else {
                    output.push_str(&format!("  <li>{} {}</li>\n", marker, text));
                }
            }
            output.push_str("</ul>\n");
        }
    }
    output
}

fn render_poll(poll: &PollContent, mode: RenderMode) -> String {
    let mut output = String::from("<div class=\"block block-poll\">\n");
    output.push_str(&format!("  <h3>{}</h3>\n", encode_text(&poll.question)));
    match mode {
        RenderMode::Preview => {
            let input_type = if poll.allow_multiple { "checkbox" } else { "radio" };
            output.push_str("  <form class=\"poll-form\">\n");
            for option in &poll.options {
                output.push_str(&format!(
                    "    <label><input type=\"{}\" name=\"poll\" value=\"{}\"> {}</label>\n",
                    input_type,
                    encode_double_quoted_attribute(&option.id),
                    encode_text(&option.text)
                ));
            }
            output.push_str("    <button type=\"submit\">Vote</button>\n");
            output.push_str("  </form>\n");
        }
        RenderMode::Published => {
            output.push_str("  <ul class=\"poll-options\">\n");
            for option in &poll.options {
                output.push_str(&format!("    <li>{}</li>\n", encode_text(&option.text)));
            }
            output.push_str("  </ul>\n");
        }
    }
    output.push_str("</div>\n");
    output
}

fn render_word_cloud(cloud: &WordCloudContent, mode: RenderMode) -> String {
    let mut output = String::from("<div class=\"block block-word-cloud\">\n");
    if let Some(title) = &cloud.title {
        output.push_str(&format!("  <h3>{}</h3>\n", encode_text(title)));
    }
    if let Some(description) = &cloud.description {
        output.push_str(&format!("  <p>{}</p>\n", encode_text(description)));
    }
    output.push_str("  <div class=\"cloud-words\">\n");
    for word in &cloud.words {
        output.push_str(&format!(
            "    <span data-value=\"{}\">{}</span>\n",
            word.value,
            encode_text(&word.text)
        ));
    }
    output.push_str("  </div>\n");
    if mode == RenderMode::Preview {
        output.push_str(
            "  <form class=\"cloud-form\"><input type=\"text\" name=\"word\"> <button type=\"submit\">Add word</button></form>\n",
        );
    }
    output.push_str("</div>\n");
    output
}

fn render_choice_comparison(comparison: &ChoiceComparisonContent, mode: RenderMode) -> String {
    let mut output = String::from("<div class=\"block block-choice-comparison\">\n");
    if let Some(title) = &comparison.title {
        output.push_str(&format!("  <h3>{}</h3>\n", encode_text(title)));
    }
    output.push_str(&format!("  <p>{}</p>\n", encode_text(&comparison.question)));
    output.push_str("  <div class=\"choices\">\n");
    for choice in &comparison.choices {
        output.push_str("    <div class=\"choice\">\n");
        if mode == RenderMode::Preview {
            output.push_str(&format!(
                "      <button type=\"button\">{}</button>\n",
                encode_text(&choice.label)
            ));
        } else {
            output.push_str(&format!("      <h4>{}</h4>\n", encode_text(&choice.label)));
        }
        if let Some(description) = &choice.description {
            output.push_str(&format!("      <p>{}</p>\n", encode_text(description)));
        }
        output.push_str("    </div>\n");
    }
    output.push_str("  </div>\n");
    output.push_str("</div>\n");
    output
}

fn render_interactive(
    block_type: &BlockType,
    interactive: &InteractiveContent,
    mode: RenderMode,
) -> String {
    let mut output = format!(
        "<div class=\"block block-interactive\" data-type=\"{}\">\n",
        encode_double_quoted_attribute(block_type.code())
    );
    if let Some(title) = &interactive.title {
        output.push_str(&format!("  <h3>{}</h3>\n", encode_text(title)));
    }
    if let Some(question) = &interactive.question {
        output.push_str(&format!(
            "  <p class=\"question\">{}</p>\n",
            encode_text(question)
        ));
    }
    if let Some(description) = &interactive.description {
        output.push_str(&format!("  <p>{}</p>\n", encode_text(description)));
    }
    if let Some(prompt) = &interactive.prompt {
        output.push_str(&format!(
            "  <p class=\"prompt\">{}</p>\n",
            encode_text(prompt)
        ));
    }
    if mode == RenderMode::Preview {
        let placeholder = interactive.placeholder.as_deref().unwrap_or("");
        let min_length = interactive
            .config
            .get("minLength")
            .and_then(serde_json::Value::as_u64);
        let mut attrs = format!(
            " placeholder=\"{}\"",
            encode_double_quoted_attribute(placeholder)
        );
        if let Some(min_length) = min_length {
            attrs.push_str(&format!(" minlength=\"{}\"", min_length));
        }
        output.push_str(&format!(
            "  <form class=\"response-form\"><textarea name=\"response\"{}></textarea> <button type=\"submit\">Submit</button></form>\n",
            attrs
        ));
    }
    output.push_str("</div>\n");
    output
}

fn render_unknown(block: &Block) -> String {
    format!(
        "<div class=\"block block-unknown\" data-type=\"{}\">Unsupported block type: {}</div>\n",
        encode_double_quoted_attribute(block.block_type.code()),
        encode_text(block.block_type.code())
    )
}
