use tabled::Table;

use crate::{
    cli::common::{access_token, spinner},
    spotify,
    types::PlaylistTableRow,
    warning,
};

pub async fn playlists() {
    let token = access_token().await;

    let pb = spinner("Fetching playlists...");
    let result = spotify::playlists::get_user_playlists(&token).await;
    pb.finish_and_clear();

    match result {
        Ok(playlists) => {
            let rows: Vec<PlaylistTableRow> = playlists
                .into_iter()
                .map(|p| PlaylistTableRow {
                    id: p.id,
                    name: p.name,
                    tracks: p.tracks.map_or(0, |t| t.total),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => warning!("Failed to load playlists. Err: {}", e),
    }
}
