//! Interactive command loops for the two widgets.
//!
//! Each loop reads one command per line until `quit` or end of input. The
//! audio loop also listens for playback notifications so cards flip back to
//! the play glyph while waiting for the next command.

use crate::commands::{Command, HELP};
use crate::error::Result;
use crate::terminal::Notice;
use sampleboard_audio::{AudioCardController, AudioCardRenderer};
use sampleboard_posts::{FilterOutcome, PostsRenderer, PostsSource, PostsViewController};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

/// Drive the posts widget. The collection must already be fetched.
pub async fn run_posts<S, R, I>(controller: &mut PostsViewController<S, R>, input: I) -> Result<()>
where
    S: PostsSource,
    R: PostsRenderer + Notice,
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                controller.renderer_mut().notice(&e.to_string());
                continue;
            }
        };
        debug!(?command, "Posts command");

        match command {
            Command::Sort => {
                let applied = controller.handle_sort_click();
                let next = controller.state().sort_direction();
                controller
                    .renderer_mut()
                    .notice(&format!("sorted {} (next: {})", applied, next));
            }
            Command::Filter(user_id) => {
                let message = match controller.handle_filter_select(user_id) {
                    FilterOutcome::Applied(id) => format!("showing posts by user {}", id),
                    FilterOutcome::Cleared => "filter cleared".to_string(),
                    FilterOutcome::Ignored => format!("no posts by user {}", user_id),
                };
                controller.renderer_mut().notice(&message);
            }
            Command::Group => {
                if !controller.toggle_filter_menu() {
                    controller.renderer_mut().notice("filter menu closed");
                }
            }
            Command::Open(post_id) => {
                if controller.toggle_item(post_id).is_none() {
                    controller
                        .renderer_mut()
                        .notice(&format!("post {} is not on screen", post_id));
                }
            }
            Command::List => {
                let state = controller.state();
                let filter = state
                    .filtered_user_id()
                    .map_or_else(|| "none".to_string(), |id| id.to_string());
                let ids: Vec<String> = controller
                    .accordion()
                    .post_ids()
                    .map(|id| id.to_string())
                    .collect();
                let summary = format!(
                    "{} posts loaded, next sort: {}, filter: {}, on screen: {}",
                    state.posts().len(),
                    state.sort_direction(),
                    filter,
                    ids.join(" ")
                );
                controller.renderer_mut().notice(&summary);
            }
            Command::Play(_) => {
                controller
                    .renderer_mut()
                    .notice("'play' is only available in the samples view");
            }
            Command::Help => controller.renderer_mut().notice(HELP),
            Command::Quit => break,
        }
    }

    info!("Posts session ended");
    Ok(())
}

/// Drive the audio widget. The catalog must already be loaded.
pub async fn run_samples<R, I>(controller: &mut AudioCardController<R>, input: I) -> Result<()>
where
    R: AudioCardRenderer + Notice,
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => apply_sample_command(controller, command),
                    Err(e) => controller.renderer_mut().notice(&e.to_string()),
                }
            }
            Some(event) = controller.next_event() => {
                controller.handle_event(event);
            }
        }
    }

    controller.stop_all();
    info!("Samples session ended");
    Ok(())
}

fn apply_sample_command<R>(controller: &mut AudioCardController<R>, command: Command)
where
    R: AudioCardRenderer + Notice,
{
    debug!(?command, "Samples command");
    match command {
        Command::Play(index) => {
            if let Err(e) = controller.toggle_playback(index) {
                controller.renderer_mut().notice(&e.to_string());
            }
        }
        Command::List => controller.render(),
        Command::Help => controller.renderer_mut().notice(HELP),
        Command::Sort | Command::Filter(_) | Command::Group | Command::Open(_) => {
            controller
                .renderer_mut()
                .notice("that command is only available in the posts view");
        }
        Command::Quit => {}
    }
}
