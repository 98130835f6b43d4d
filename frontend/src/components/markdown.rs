use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarkdownProps {
    pub content: String,
}

/// Character replies are rendered as markdown; models like to emphasise
/// actions with `*asterisks*`.
#[function_component(Markdown)]
pub fn markdown(props: &MarkdownProps) -> Html {
    render_markdown(&props.content)
}

struct Frame<'a> {
    tag: Option<Tag<'a>>,
    children: Vec<Html>,
}

fn render_markdown(markdown: &str) -> Html {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let mut stack = vec![Frame {
        tag: None,
        children: Vec::new(),
    }];

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(tag) => stack.push(Frame {
                tag: Some(tag),
                children: Vec::new(),
            }),
            Event::End(_) => {
                if stack.len() > 1
                    && let Some(frame) = stack.pop()
                {
                    let node = wrap(frame.tag, frame.children);
                    push(&mut stack, node);
                }
            }
            Event::Text(text) => push(&mut stack, html! { {text.to_string()} }),
            Event::Code(code) => push(&mut stack, html! { <code>{code.to_string()}</code> }),
            Event::SoftBreak => push(&mut stack, html! { " " }),
            Event::HardBreak => push(&mut stack, html! { <br/> }),
            Event::Rule => push(&mut stack, html! { <hr/> }),
            _ => {}
        }
    }

    // Unbalanced input: fold whatever is still open into its parent
    while stack.len() > 1 {
        if let Some(frame) = stack.pop() {
            let node = wrap(frame.tag, frame.children);
            push(&mut stack, node);
        }
    }

    let children = stack.pop().map(|f| f.children).unwrap_or_default();
    html! { <div class="markdown">{ for children }</div> }
}

fn push(stack: &mut [Frame<'_>], node: Html) {
    if let Some(top) = stack.last_mut() {
        top.children.push(node);
    }
}

fn wrap(tag: Option<Tag<'_>>, children: Vec<Html>) -> Html {
    let content = html! { { for children } };
    let Some(tag) = tag else {
        return content;
    };
    match tag {
        Tag::Paragraph => html! { <p>{content}</p> },
        Tag::Heading { level, .. } => {
            let tag_name = format!("h{}", level as u8);
            html! { <@{tag_name}>{content}</@> }
        }
        Tag::BlockQuote(_) => html! { <blockquote>{content}</blockquote> },
        Tag::CodeBlock(kind) => {
            let lang = match kind {
                CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                _ => None,
            };
            html! { <pre><code class={lang}>{content}</code></pre> }
        }
        Tag::List(Some(start)) => html! { <ol start={start.to_string()}>{content}</ol> },
        Tag::List(None) => html! { <ul>{content}</ul> },
        Tag::Item => html! { <li>{content}</li> },
        Tag::Emphasis => html! { <em>{content}</em> },
        Tag::Strong => html! { <strong>{content}</strong> },
        Tag::Strikethrough => html! { <del>{content}</del> },
        Tag::Link { dest_url, .. } => html! {
            <a href={dest_url.to_string()} target="_blank" rel="noopener noreferrer">{content}</a>
        },
        _ => content,
    }
}
