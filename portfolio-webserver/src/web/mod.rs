use anyhow::anyhow;
use portfolio_db_sqlite::Store;
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;


pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    store: Store,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(store);
    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes()), ("/", frontend::routes())]
}

pub async fn run(store: Store, enable_cors: bool) -> anyhow::Result<()> {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
    };
    let instance = rocket_instance(options, store);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default()
            .to_cors()
            .map_err(|err| anyhow!("Invalid CORS configuration: {err}"))?;
        info!("CORS is enabled for all origins");
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        return Err(anyhow!("Unable to run web server: {err}"));
    }
    Ok(())
}
