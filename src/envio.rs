//! Este modulo contiene el recorrido completo de una ejecucion: leer la
//! configuracion, crear el cliente, generar un pedido de prueba, insertarlo
//! y avisar el resultado al operador. Devuelve el codigo de salida del proceso

use std::io::Write;

use chrono::Utc;

use crate::aliases::BuscarVariable;
use crate::almacen::{AlmacenPedidos, TABLA_PEDIDOS};
use crate::configuracion::{Configuracion, VARIABLE_CLAVE, VARIABLE_URL};
use crate::consola::Consola;
use crate::errores::{Error, ErrorAlmacen};
use crate::generators::pedidos_gen::{generar_pedido, ESTADO_PENDIENTE_IMPRESION};
use crate::pedido::Pedido;

pub const SALIDA_EXITOSA: i32 = 0;
pub const SALIDA_FALLIDA: i32 = 1;

/// Ejecuta una insercion de prueba completa. `construir` se llama solo si la
/// configuracion esta completa, y el almacen recibe a lo sumo una insercion.
/// Ningun error se reintenta
pub async fn ejecutar<A, F, S, E>(
    buscar: BuscarVariable<'_>,
    construir: F,
    consola: &mut Consola<S, E>,
) -> i32
where
    A: AlmacenPedidos,
    F: FnOnce(&Configuracion) -> Result<A, ErrorAlmacen>,
    S: Write,
    E: Write,
{
    match insertar_pedido_de_prueba(buscar, construir, consola).await {
        Ok(pedido) => {
            consola.exito(format!(
                "Pedido {} insertado con estado {}",
                pedido.order_number,
                ESTADO_PENDIENTE_IMPRESION
            ));
            consola.pista("Observa la terminal del agente de impresion para ver el ticket.");
            SALIDA_EXITOSA
        }
        Err(error) => {
            reportar_error(consola, &error);
            SALIDA_FALLIDA
        }
    }
}

async fn insertar_pedido_de_prueba<A, F, S, E>(
    buscar: BuscarVariable<'_>,
    construir: F,
    consola: &mut Consola<S, E>,
) -> Result<Pedido, Error>
where
    A: AlmacenPedidos,
    F: FnOnce(&Configuracion) -> Result<A, ErrorAlmacen>,
    S: Write,
    E: Write,
{
    let config = Configuracion::desde_variables(buscar)?;
    let almacen = construir(&config)?;

    let pedido = generar_pedido(&mut rand::thread_rng(), Utc::now());
    tracing::info!(pedido = %pedido.order_number, total = pedido.total(), "pedido generado");
    consola.info(format!("Insertando {} (total {:.2})", pedido, pedido.total()));

    almacen.insertar(TABLA_PEDIDOS, &pedido).await?;
    Ok(pedido)
}

fn reportar_error<S: Write, E: Write>(consola: &mut Consola<S, E>, error: &Error) {
    match error {
        Error::ErrorDeConfiguracion(e) => consola.error(format!(
            "Variables {} o {} faltantes ({})",
            VARIABLE_URL, VARIABLE_CLAVE, e
        )),
        Error::ErrorDeAlmacen(e @ ErrorAlmacen::Rechazo { .. }) => {
            consola.error(format!("Error de insercion: {}", e))
        }
        // fallas de red o de construccion del cliente: el almacen nunca respondio
        Error::ErrorDeAlmacen(e) => consola.error(format!("Excepcion: {}", e)),
    }
}
