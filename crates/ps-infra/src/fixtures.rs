use chrono::DateTime;
use ps_core::{Episode, Podcast, PodcastFeed};

pub fn podcast(uri: &str) -> Podcast {
    Podcast::new(uri.into(), format!("Podcast {uri}"))
}

pub fn episode(uri: &str, podcast_uri: &str) -> Episode {
    Episode {
        uri: uri.into(),
        podcast_uri: podcast_uri.into(),
        title: format!("Episode {uri}"),
        subtitle: None,
        summary: None,
        author: None,
        published: DateTime::parse_from_rfc3339("2024-03-01T10:00:00+00:00").unwrap(),
        duration_secs: Some(1800),
    }
}

pub fn feed(podcast_uri: &str, episode_uris: &[&str]) -> PodcastFeed {
    PodcastFeed {
        podcast: podcast(podcast_uri),
        episodes: episode_uris
            .iter()
            .map(|uri| episode(uri, podcast_uri))
            .collect(),
    }
}
