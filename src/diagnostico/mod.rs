//! Este modulo permite verificar, antes de lanzar pruebas, que el entorno
//! esta listo: variables de conexion presentes y con valores reales, y el
//! almacen respondiendo sobre la tabla de pedidos

use std::env::consts;
use std::io::Write;

use crate::aliases::BuscarVariable;
use crate::almacen::{AlmacenPedidos, TABLA_PEDIDOS};
use crate::configuracion::{
    es_valor_de_ejemplo, Configuracion, ARCHIVO_ENTORNO, VARIABLE_CLAVE, VARIABLE_URL,
};
use crate::consola::Consola;
use crate::errores::ErrorAlmacen;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstadoVariable {
    Configurada,
    Faltante,
    DeEjemplo,
}

/// Resultado de todas las verificaciones
#[derive(Debug)]
pub struct Informe {
    pub archivo_entorno: bool,
    pub variables: Vec<(&'static str, EstadoVariable)>,
    /// `None` si el sondeo no se hizo
    pub conexion: Option<Result<usize, String>>,
}

impl Informe {
    pub fn configuracion_completa(&self) -> bool {
        self.variables
            .iter()
            .all(|(_, estado)| *estado == EstadoVariable::Configurada)
    }

    pub fn todo_en_orden(&self) -> bool {
        self.configuracion_completa() && !matches!(self.conexion, Some(Err(_)))
    }
}

/// Clasifica el valor de una variable de configuracion
pub fn estado_variable(buscar: BuscarVariable, nombre: &str) -> EstadoVariable {
    match buscar(nombre) {
        Some(valor) if valor.trim().is_empty() => EstadoVariable::Faltante,
        Some(valor) if es_valor_de_ejemplo(&valor) => EstadoVariable::DeEjemplo,
        Some(_) => EstadoVariable::Configurada,
        None => EstadoVariable::Faltante,
    }
}

/// Corre las verificaciones, informando cada una por consola. El almacen solo
/// se sondea si la configuracion esta completa y `sondear_red` lo permite
pub async fn diagnosticar<A, F, S, E>(
    buscar: BuscarVariable<'_>,
    archivo_entorno: bool,
    sondear_red: bool,
    construir: F,
    consola: &mut Consola<S, E>,
) -> Informe
where
    A: AlmacenPedidos,
    F: FnOnce(&Configuracion) -> Result<A, ErrorAlmacen>,
    S: Write,
    E: Write,
{
    consola.info(format!("Sistema: {} {}", consts::OS, consts::ARCH));

    if archivo_entorno {
        consola.exito(format!("Archivo {} encontrado", ARCHIVO_ENTORNO));
    } else {
        consola.aviso(format!(
            "Archivo {} no encontrado (opcional, se usan las variables del entorno)",
            ARCHIVO_ENTORNO
        ));
    }

    let variables: Vec<(&'static str, EstadoVariable)> = [VARIABLE_URL, VARIABLE_CLAVE]
        .into_iter()
        .map(|nombre| (nombre, estado_variable(buscar, nombre)))
        .collect();

    for (nombre, estado) in &variables {
        match estado {
            EstadoVariable::Configurada => consola.exito(format!("{} configurada", nombre)),
            EstadoVariable::Faltante => consola.error(format!("{} faltante", nombre)),
            EstadoVariable::DeEjemplo => {
                consola.error(format!("{} todavia tiene el valor de ejemplo", nombre))
            }
        }
    }

    let mut informe = Informe {
        archivo_entorno,
        variables,
        conexion: None,
    };

    if !informe.configuracion_completa() {
        consola.aviso("Sondeo del almacen omitido: configuracion incompleta");
    } else if !sondear_red {
        consola.aviso("Sondeo del almacen omitido");
    } else {
        informe.conexion = Some(sondear(buscar, construir).await);
        match &informe.conexion {
            Some(Ok(_)) => consola.exito(format!("Conexion a la tabla '{}' correcta", TABLA_PEDIDOS)),
            Some(Err(e)) => consola.error(format!("Fallo el sondeo de '{}': {}", TABLA_PEDIDOS, e)),
            None => {}
        }
    }

    if informe.todo_en_orden() {
        consola.pista("Todo listo: ya se puede correr insertar_pedido");
    } else {
        consola.error("Hay verificaciones fallidas, revisar los mensajes anteriores");
    }
    informe
}

async fn sondear<A, F>(buscar: BuscarVariable<'_>, construir: F) -> Result<usize, String>
where
    A: AlmacenPedidos,
    F: FnOnce(&Configuracion) -> Result<A, ErrorAlmacen>,
{
    let config = Configuracion::desde_variables(buscar).map_err(|e| e.to_string())?;
    let almacen = construir(&config).map_err(|e| e.to_string())?;
    almacen
        .sondear(TABLA_PEDIDOS)
        .await
        .map_err(|e| e.to_string())
}
