//! Este modulo define la configuracion de conexion con el almacen de pedidos,
//! leida de variables de entorno (o de un archivo `.env`)

use std::env;
use std::path::{Path, PathBuf};

use crate::aliases::BuscarVariable;
use crate::errores::ErrorConfiguracion;

pub const VARIABLE_URL: &str = "SUPABASE_URL";
pub const VARIABLE_CLAVE: &str = "SUPABASE_KEY";
pub const ARCHIVO_ENTORNO: &str = ".env";

/// Valores de ejemplo que vienen en las plantillas de configuracion, y que
/// nunca apuntan a un almacen real
pub const VALORES_DE_EJEMPLO: [&str; 5] = [
    "https://votre-projet.supabase.co",
    "votre-anon-key-ici",
    "votre-anon-key-publique-ici",
    "https://demo.supabase.co",
    "demo-key",
];

/// Datos necesarios para conectarse al almacen: url base y clave de acceso
#[derive(Debug, Clone, PartialEq)]
pub struct Configuracion {
    pub url: String,
    pub clave: String,
}

impl Configuracion {
    /// Lee la configuracion a partir de una funcion de busqueda de variables.
    /// Los valores se recortan, y un valor vacio cuenta como faltante
    pub fn desde_variables(buscar: BuscarVariable) -> Result<Self, ErrorConfiguracion> {
        let url = leer_variable(buscar, VARIABLE_URL)?;
        let clave = leer_variable(buscar, VARIABLE_CLAVE)?;
        Ok(Self { url, clave })
    }
}

/// Busca una variable en el entorno del proceso
pub fn variable_de_entorno(nombre: &str) -> Option<String> {
    env::var(nombre).ok()
}

/// Resultado de intentar cargar el archivo `.env`
#[derive(Debug, PartialEq)]
pub enum CargaEntorno {
    Cargado(PathBuf),
    NoEncontrado,
    Ilegible(String),
}

impl CargaEntorno {
    /// Indica si el archivo existe, aunque no se haya podido leer
    pub fn encontrado(&self) -> bool {
        !matches!(self, CargaEntorno::NoEncontrado)
    }

    /// Deja constancia de la carga en los logs. Se llama una vez inicializados
    pub fn registrar(&self) {
        match self {
            CargaEntorno::Cargado(ruta) => {
                tracing::debug!("variables cargadas de {}", ruta.display())
            }
            CargaEntorno::NoEncontrado => tracing::debug!("sin archivo {}", ARCHIVO_ENTORNO),
            CargaEntorno::Ilegible(motivo) => {
                tracing::warn!("no se pudo leer {}: {}", ARCHIVO_ENTORNO, motivo)
            }
        }
    }
}

/// Carga el archivo `.env` del directorio actual, si existe
pub fn cargar_archivo_entorno() -> CargaEntorno {
    cargar_archivo_entorno_en(Path::new("."))
}

/// Carga el archivo `.env` de un directorio dado. No se busca en los
/// directorios padre, y nunca se pisan variables ya definidas
pub fn cargar_archivo_entorno_en(directorio: &Path) -> CargaEntorno {
    let ruta = directorio.join(ARCHIVO_ENTORNO);
    match dotenvy::from_path(&ruta) {
        Ok(()) => CargaEntorno::Cargado(ruta),
        Err(e) if e.not_found() => CargaEntorno::NoEncontrado,
        Err(e) => CargaEntorno::Ilegible(e.to_string()),
    }
}

/// Indica si un valor es uno de los de ejemplo de las plantillas
pub fn es_valor_de_ejemplo(valor: &str) -> bool {
    VALORES_DE_EJEMPLO.contains(&valor.trim())
}

fn leer_variable(buscar: BuscarVariable, nombre: &str) -> Result<String, ErrorConfiguracion> {
    buscar(nombre)
        .map(|valor| valor.trim().to_string())
        .filter(|valor| !valor.is_empty())
        .ok_or_else(|| ErrorConfiguracion::VariableFaltante(nombre.to_string()))
}
