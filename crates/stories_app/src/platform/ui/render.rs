use stories_core::{AppViewModel, StoryRowView};

pub const TITLE: &str = "My Hacker Stories";
const RULE: &str = "----------------------------------------";

/// Renders the whole screen as lines of text.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![
        TITLE.to_string(),
        format!("Search: {}", view.search_term),
        RULE.to_string(),
    ];

    if view.is_error {
        lines.push("Something went wrong ...".to_string());
    }

    if view.is_loading {
        lines.push("Loading ...".to_string());
        return lines;
    }

    if view.stories.is_empty() {
        lines.push("(no stories)".to_string());
    } else {
        lines.extend(view.stories.iter().map(render_row));
    }

    if view.stories.len() != view.total_stories {
        lines.push(format!(
            "showing {} of {} stories",
            view.stories.len(),
            view.total_stories
        ));
    }
    lines
}

fn render_row(row: &StoryRowView) -> String {
    format!(
        "[{}] {} <{}> by {} | {} comments | {} points",
        row.object_id, row.title, row.url, row.author, row.num_comments, row.points
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stories_core::{StoriesStatus, StoryId};

    fn row(id: u64, title: &str) -> StoryRowView {
        StoryRowView {
            object_id: StoryId::from(id),
            title: title.to_string(),
            url: "https://reactjs.org/".to_string(),
            author: "Jordan Walke".to_string(),
            num_comments: 3,
            points: 4,
        }
    }

    #[test]
    fn loaded_view_lists_rows() {
        let view = AppViewModel {
            search_term: "react".to_string(),
            status: StoriesStatus::Loaded,
            stories: vec![row(0, "React")],
            total_stories: 1,
            ..AppViewModel::default()
        };

        assert_eq!(
            render(&view),
            vec![
                TITLE.to_string(),
                "Search: react".to_string(),
                RULE.to_string(),
                "[0] React <https://reactjs.org/> by Jordan Walke | 3 comments | 4 points"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn loading_hides_the_list() {
        let view = AppViewModel {
            is_loading: true,
            status: StoriesStatus::Fetching,
            stories: vec![row(0, "React")],
            total_stories: 1,
            ..AppViewModel::default()
        };

        let lines = render(&view);
        assert_eq!(lines.last().map(String::as_str), Some("Loading ..."));
        assert!(!lines.iter().any(|line| line.contains("React")));
    }

    #[test]
    fn error_banner_sits_above_stale_rows() {
        let view = AppViewModel {
            is_error: true,
            status: StoriesStatus::Errored,
            stories: vec![row(0, "React")],
            total_stories: 1,
            ..AppViewModel::default()
        };

        let lines = render(&view);
        assert_eq!(lines[3], "Something went wrong ...");
        assert!(lines[4].contains("React"));
    }

    #[test]
    fn filtered_view_reports_hidden_rows() {
        let view = AppViewModel {
            stories: vec![row(1, "Redux")],
            total_stories: 4,
            ..AppViewModel::default()
        };

        let lines = render(&view);
        assert_eq!(lines.last().map(String::as_str), Some("showing 1 of 4 stories"));
    }
}
