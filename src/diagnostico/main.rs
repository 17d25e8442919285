//! Verifica la configuracion y la conexion con el almacen antes de
//! lanzar pruebas de impresion

use clap::Parser;
use comandero::almacen::supabase::ClienteSupabase;
use comandero::configuracion::variable_de_entorno;
use comandero::consola::Consola;
use comandero::diagnostico::diagnosticar;
use comandero::envio::{SALIDA_EXITOSA, SALIDA_FALLIDA};
use comandero::registro;

/// Diagnostico del entorno de pruebas
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Argumentos {
    /// No sondea la tabla de pedidos
    #[arg(long, default_value_t = false)]
    sin_red: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let argumentos = Argumentos::parse();
    let carga_entorno = registro::iniciar_con_entorno();

    let mut consola = Consola::estandar();
    let informe = diagnosticar(
        &variable_de_entorno,
        carga_entorno.encontrado(),
        !argumentos.sin_red,
        ClienteSupabase::new,
        &mut consola,
    )
    .await;

    if informe.todo_en_orden() {
        std::process::exit(SALIDA_EXITOSA);
    }
    std::process::exit(SALIDA_FALLIDA);
}
