//! Output formatting utilities

use crate::domain::{BoardView, EmptyReason, Post};
use chrono::{Local, TimeZone};
use std::fmt::Display;

/// Format an epoch-millisecond timestamp in local time
pub fn format_timestamp(millis: i64) -> String {
    format_timestamp_in(millis, &Local)
}

/// Format an epoch-millisecond timestamp in the given time zone
pub fn format_timestamp_in<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(millis).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => millis.to_string(),
    }
}

fn type_label(post: &Post) -> &'static str {
    if post.is_notice {
        "[notice]"
    } else {
        "[post]"
    }
}

fn empty_message(reason: Option<EmptyReason>, noun: &str) -> String {
    match reason {
        Some(EmptyReason::NoMatch) => format!("  No {} match the search.\n", noun),
        _ => format!("  No {} yet.\n", noun),
    }
}

/// Format one post as a list entry
pub fn format_post(post: &Post) -> String {
    let mut output = format!(
        "  {} {}  {}  ({})\n",
        type_label(post),
        format_timestamp(post.created_at),
        post.title,
        post.id
    );

    for line in post.content.lines() {
        output.push_str(&format!("      {}\n", line));
    }

    if let Some(updated_at) = post.updated_at {
        output.push_str(&format!("      (edited {})\n", format_timestamp(updated_at)));
    }

    output
}

/// Format a single post with all of its fields
pub fn format_post_detail(post: &Post) -> String {
    let mut output = format!("{} {}\n", type_label(post), post.title);
    output.push_str(&format!("id:      {}\n", post.id));
    output.push_str(&format!("created: {}\n", format_timestamp(post.created_at)));
    if let Some(updated_at) = post.updated_at {
        output.push_str(&format!("edited:  {}\n", format_timestamp(updated_at)));
    }
    output.push('\n');
    output.push_str(&post.content);
    output.push('\n');
    output
}

/// Format the notice and post sections of a board view
pub fn format_view(view: &BoardView) -> String {
    let mut output = format!("Notices ({})\n", view.notice_count);
    if view.notices.is_empty() {
        output.push_str(&empty_message(view.empty_notice_reason, "notices"));
    }
    for post in &view.notices {
        output.push_str(&format_post(post));
    }

    output.push('\n');

    output.push_str(&format!("Posts ({})\n", view.regular_count));
    if view.regular.is_empty() {
        output.push_str(&empty_message(view.empty_regular_reason, "posts"));
    }
    for post in &view.regular {
        output.push_str(&format_post(post));
    }

    output
}
