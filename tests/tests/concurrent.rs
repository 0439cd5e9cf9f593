use rowscan::{row, Api, CacheMode, Record, Resolver, ValueRows};
use std::thread;

#[derive(Debug, Default, Record)]
struct Event {
    pub id: i64,
    pub kind: String,
    #[db(embed)]
    pub source: Source,
}

#[derive(Debug, Default, Record)]
struct Source {
    pub host: String,
    pub port: u16,
}

fn events() -> ValueRows {
    ValueRows::new(
        ["id", "kind", "host", "port"],
        (0..16).map(|i| row![i, "click", "localhost", 8080]).collect(),
    )
}

#[test]
fn concurrent_scanners_share_a_consistent_cache() {
    tests::init_logging();

    for mode in [CacheMode::Disabled, CacheMode::Locked, CacheMode::Concurrent] {
        let api = Api::builder().cache_mode(mode).build();

        thread::scope(|s| {
            for worker in 0..8 {
                let api = api.clone();
                s.spawn(move || {
                    for round in 0..50 {
                        if worker == 0 && round % 10 == 0 {
                            api.reset_cache();
                        }

                        let events = api.scan_all::<Event, Vec<_>>(events()).unwrap();
                        assert_eq!(events.len(), 16);
                        assert_eq!(events[15].id, 15);
                        assert_eq!(events[15].source.port, 8080);
                    }
                });
            }
        });

        let fresh = Resolver::new().resolve(Event::descriptor()).unwrap();
        assert_eq!(*api.column_map::<Event>().unwrap(), fresh);
    }
}
