mod crtsh;
mod prober;
