//! Generadores de datos aleatorios para ejercitar al agente de impresion

pub mod pedidos_gen;
