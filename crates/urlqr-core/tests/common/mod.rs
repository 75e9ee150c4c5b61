pub mod qr_decode;
