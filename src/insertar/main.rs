//! Genera un pedido de prueba aleatorio y lo inserta en la tabla de pedidos,
//! en estado pendiente de impresion, para que el agente de impresion lo tome.
//! Lee `SUPABASE_URL` y `SUPABASE_KEY` del entorno o de un archivo `.env`

use clap::Parser;
use comandero::almacen::supabase::ClienteSupabase;
use comandero::configuracion::variable_de_entorno;
use comandero::consola::Consola;
use comandero::{envio, registro};

/// Inserta un pedido de prueba en el almacen
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Argumentos {}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    Argumentos::parse();
    registro::iniciar_con_entorno();

    let mut consola = Consola::estandar();
    let codigo = envio::ejecutar(&variable_de_entorno, ClienteSupabase::new, &mut consola).await;

    std::process::exit(codigo);
}
