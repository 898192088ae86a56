use tabled::Table;

use crate::{
    cli::common::{access_token, spinner},
    info, spotify,
    types::TrackTableRow,
    utils, warning,
};

pub async fn search(query: String, limit: u32) {
    let token = access_token().await;

    let pb = spinner("Searching tracks...");
    let result = spotify::tracks::search_tracks(&token, &query, limit).await;
    pb.finish_and_clear();

    let tracks = match result {
        Ok(tracks) => tracks,
        Err(e) => {
            warning!("Failed to search tracks. Err: {}", e);
            return;
        }
    };

    if tracks.is_empty() {
        info!("No tracks found for \"{}\".", query);
        return;
    }

    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            id: t.id.clone(),
            name: t.name.clone(),
            artists: utils::join_artist_names(t),
            duration: utils::format_duration(t.duration_ms),
        })
        .collect();

    println!("{}", Table::new(rows));
}
