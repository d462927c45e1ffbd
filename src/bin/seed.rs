use axum_catalog_api::{
    config::AppConfig,
    models::{Product, next_id},
    store::JsonStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    tokio::fs::create_dir_all(&config.data_dir).await?;

    let store: JsonStore<Product> = JsonStore::new(config.products_path());
    let mut products = store.load().await?;

    for sample in sample_products() {
        // Codes are unique; re-running the seed must not duplicate them.
        if products.iter().any(|p| p.code == sample.code) {
            continue;
        }
        let id = next_id(products.iter().map(|p| p.id));
        products.push(Product { id, ..sample });
    }

    store.save(&products).await?;
    println!(
        "Seed completed. {} products in {}",
        products.len(),
        store.path().display()
    );
    Ok(())
}

fn sample_products() -> Vec<Product> {
    let sample = |title: &str, code: &str, category: &str, price: f64, stock: i64| Product {
        id: 0,
        title: title.to_string(),
        description: format!("{title} de muestra"),
        code: code.to_string(),
        category: category.to_string(),
        price,
        stock,
        thumbnails: Vec::new(),
        status: true,
    };

    vec![
        sample("Teclado mecánico", "KB-01", "periféricos", 54.99, 25),
        sample("Mouse inalámbrico", "MS-02", "periféricos", 19.99, 40),
        sample("Monitor 24\"", "MN-03", "pantallas", 139.0, 12),
        sample("Auriculares", "AU-04", "audio", 29.5, 30),
    ]
}
