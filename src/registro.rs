//! Inicializacion de los logs de diagnostico. Se escriben a stderr y se
//! filtran con `RUST_LOG`; por defecto solo aparecen los avisos, para que
//! la consola muestre unicamente las lineas de estado

use tracing_subscriber::EnvFilter;

use crate::configuracion::{cargar_archivo_entorno, CargaEntorno};

pub const NIVEL_POR_DEFECTO: &str = "warn";

/// Carga el archivo `.env` y recien despues arma los logs, para que un
/// `RUST_LOG` definido en el archivo se respete
pub fn iniciar_con_entorno() -> CargaEntorno {
    let carga = cargar_archivo_entorno();
    inicializar();
    carga.registrar();
    carga
}

pub fn inicializar() {
    tracing_subscriber::fmt()
        .with_env_filter(filtro())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Filtro tomado de `RUST_LOG`, o el nivel por defecto
pub fn filtro() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(NIVEL_POR_DEFECTO))
}
